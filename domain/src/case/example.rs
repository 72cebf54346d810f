//! Canned example cases used to autofill the drafting form

use super::record::CaseInputRecord;
use super::schema::CaseSchema;

const LONG_FORM: &[(&str, &str)] = &[
    ("case_type", "Ação de Indenização por Danos Materiais e Morais"),
    (
        "parties",
        "Autor: Maria Silva, brasileira, casada, portadora do RG nº 12.345.678-9 e CPF nº \
         123.456.789-00, residente e domiciliada na Rua das Flores, nº 123, Bairro Centro, \
         Cidade de São Paulo/SP, CEP 01234-567.\n\n\
         Réu: Empresa XYZ Ltda., pessoa jurídica de direito privado, inscrita no CNPJ sob o nº \
         12.345.678/0001-90, com sede na Avenida Principal, nº 456, Bairro Industrial, Cidade de \
         São Paulo/SP, CEP 04567-890.",
    ),
    (
        "facts",
        "A autora adquiriu um produto eletrônico que apresentou defeito após 3 meses de uso. \
         A empresa se recusou a realizar a troca ou conserto, alegando que o prazo de garantia \
         havia expirado.",
    ),
    (
        "legal_grounds",
        "Código de Defesa do Consumidor, art. 6º, inciso III - direito à informação adequada e \
         clara sobre os produtos e serviços.",
    ),
    (
        "requests",
        "1. Condenação da ré ao pagamento de R$ 10.000,00 a título de danos materiais;\n\
         2. Condenação da ré ao pagamento de R$ 5.000,00 a título de danos morais;\n\
         3. Honorários advocatícios de 20% sobre o valor da causa.",
    ),
];

const SHORT_FORM: &[(&str, &str)] = &[
    ("tipo_acao", "Ação de Indenização por Danos Materiais e Morais"),
    ("autor", "Maria Silva, brasileira, casada, CPF nº 123.456.789-00"),
    ("reu", "Empresa XYZ Ltda., CNPJ nº 12.345.678/0001-90"),
    (
        "fatos",
        "A autora adquiriu um produto eletrônico que apresentou defeito após 3 meses de uso. \
         A empresa se recusou a realizar a troca ou conserto, alegando garantia expirada.",
    ),
    (
        "fundamentacao",
        "Código de Defesa do Consumidor, art. 6º, inciso III, e art. 18, que tratam da \
         informação adequada e da responsabilidade por vícios do produto.",
    ),
    (
        "pedidos",
        "1. Danos materiais de R$ 10.000,00;\n\
         2. Danos morais de R$ 5.000,00;\n\
         3. Honorários advocatícios de 20% sobre o valor da causa.",
    ),
];

/// Built-in example record for a schema
pub fn example_case(schema: CaseSchema) -> CaseInputRecord {
    let pairs = match schema {
        CaseSchema::Long => LONG_FORM,
        CaseSchema::Short => SHORT_FORM,
    };
    CaseInputRecord::from_pairs(pairs.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::record::PARAGRAPH_SEPARATOR;

    #[test]
    fn test_example_covers_schema_keys() {
        for schema in [CaseSchema::Long, CaseSchema::Short] {
            let record = example_case(schema);
            for key in schema.field_keys() {
                assert!(record.get(key).is_some(), "{schema}: {key}");
            }
            assert_eq!(record.len(), schema.field_keys().len());
        }
    }

    #[test]
    fn test_examples_pass_validation() {
        for schema in [CaseSchema::Long, CaseSchema::Short] {
            let issues = example_case(schema).validate(schema);
            assert!(issues.is_empty(), "{schema}: {issues:?}");
        }
    }

    #[test]
    fn test_long_form_parties_has_two_paragraphs() {
        let record = example_case(CaseSchema::Long);
        let paragraphs: Vec<&str> = record
            .get("parties")
            .unwrap()
            .split(PARAGRAPH_SEPARATOR)
            .collect();
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs[0].starts_with("Autor: Maria Silva"));
        assert!(paragraphs[1].starts_with("Réu: Empresa XYZ"));
    }
}
