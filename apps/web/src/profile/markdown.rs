//! Renders an `IdealCustomerProfile` as a fixed-template markdown document,
//! and markdown as HTML for the generation page.

use pulldown_cmark::{html, Event, Parser};

use crate::profile::models::IdealCustomerProfile;

pub const DOCUMENT_TITLE: &str = "# Perfil Do Cliente Ideal";

/// Top-level section headings, in document order.
pub const SECTION_HEADINGS: [&str; 5] = [
    "## a) Dados Demográficos",
    "## b) Problema Principal",
    "## c) Outras Soluções",
    "## d) Transformação Primária",
    "## e) Especificidades Do Mercado",
];

/// Formats the profile. Total over any profile, including the empty one.
pub fn format_profile_markdown(profile: &IdealCustomerProfile) -> String {
    let demo = &profile.demographic_data;
    let problem = &profile.main_problem;
    let emotions = &problem.emotional_aspects;
    let relationships = &problem.relationship_impact;
    let others = &profile.other_solutions;
    let transformation = &profile.primary_transformation;
    let market = &profile.market_specifics;

    let mut md = String::new();
    md.push_str(DOCUMENT_TITLE);
    md.push_str("\n\n");

    md.push_str(SECTION_HEADINGS[0]);
    md.push('\n');
    field(&mut md, "Nome", &demo.name);
    field(&mut md, "Idade", &demo.age);
    field(&mut md, "Breve Descrição", &demo.brief_description);
    field(&mut md, "Mercado-Alvo", &demo.target_market);
    field(&mut md, "Avatar", &demo.avatar);
    md.push('\n');

    md.push_str(SECTION_HEADINGS[1]);
    md.push('\n');
    field(
        &mut md,
        "O Problema Principal Que Enfrentam",
        &problem.primary_issue,
    );
    list(&mut md, "Problemas Secundários", &problem.secondary_issues);
    md.push('\n');
    list(
        &mut md,
        "5 Principais Emoções em Torno Deste Problema",
        &emotions.primary_emotions,
    );
    md.push('\n');
    list(&mut md, "5 Maiores Medos", &emotions.fears);
    md.push('\n');
    list(
        &mut md,
        "Desejos Secretos Mais Profundos",
        &emotions.secret_desires,
    );
    md.push('\n');
    list(
        &mut md,
        "5 Maneiras Como Medos Afetam Relacionamentos",
        &relationships.fear_effects,
    );
    md.push('\n');
    list(
        &mut md,
        "5 Frases Conversacionais Ofensivas",
        &relationships.trigger_phrases,
    );
    md.push('\n');

    md.push_str(SECTION_HEADINGS[2]);
    md.push('\n');
    list(&mut md, "O Que Tentaram no Passado", &others.past_attempts);
    md.push('\n');
    list(
        &mut md,
        "Soluções Comuns Indesejadas",
        &others.unwanted_solutions,
    );
    md.push('\n');

    md.push_str(SECTION_HEADINGS[3]);
    md.push('\n');
    field(&mut md, "Solução Perfeita", &transformation.perfect_solution);
    field(
        &mut md,
        "Como Afetaria Relacionamentos",
        &transformation.relationship_effects,
    );
    field(
        &mut md,
        "Identidade do Avatar Transformado",
        &transformation.transformed_identity,
    );
    field(
        &mut md,
        "Futuro Presumido de Sucesso",
        &transformation.future_success,
    );
    md.push('\n');
    list(
        &mut md,
        "Benefícios Práticos",
        &transformation.benefits.practical,
    );
    md.push('\n');
    list(
        &mut md,
        "Benefícios Emocionais",
        &transformation.benefits.emotional,
    );
    md.push('\n');

    md.push_str(SECTION_HEADINGS[4]);
    md.push('\n');
    field(&mut md, "Base de Sucesso", &market.success_foundation);
    md.push('\n');
    list(
        &mut md,
        "5 Maiores Objeções do Mercado",
        &market.objections.market,
    );
    md.push('\n');
    list(&mut md, "Objeções Práticas", &market.objections.practical);
    md.push('\n');
    list(&mut md, "Objeções Emocionais", &market.objections.emotional);
    md.push('\n');
    list(
        &mut md,
        "Palavras Poderosas",
        &market.powerful_language.words,
    );
    md.push('\n');
    list(
        &mut md,
        "Frases Poderosas",
        &market.powerful_language.phrases,
    );

    md
}

fn field(md: &mut String, label: &str, value: &str) {
    md.push_str(&format!("- **{label}**: {value}\n"));
}

fn list(md: &mut String, label: &str, items: &[String]) {
    md.push_str(&format!("- **{label}**:\n"));
    for item in items {
        md.push_str(&format!("  - {item}\n"));
    }
}

/// Converts markdown to HTML. Raw HTML in the input is emitted as escaped
/// text, so model output cannot inject markup into the page.
pub fn markdown_to_html(markdown: &str) -> String {
    let events = Parser::new(markdown).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::{EmotionalAspects, MainProblem};

    fn sample_profile() -> IdealCustomerProfile {
        IdealCustomerProfile::from_value(serde_json::json!({
            "demographic_data": {
                "name": "Mariana",
                "age": 38,
                "brief_description": "Empreendedora digital",
                "target_market": "Infoprodutores",
                "avatar": "Mulher de óculos, sorridente"
            },
            "main_problem": {
                "primary_issue": "Baixa conversão",
                "secondary_issues": ["a", "b", "c", "d", "e"],
                "emotional_aspects": {
                    "primary_emotions": ["frustração", "ansiedade", "medo", "culpa", "raiva"],
                    "fears": ["falir", "errar", "julgamento", "solidão", "estagnar"],
                    "secret_desires": ["liberdade", "reconhecimento", "tempo", "segurança"]
                },
                "relationship_impact": {
                    "fear_effects": ["1", "2", "3", "4", "5"],
                    "trigger_phrases": ["p1", "p2", "p3", "p4", "p5"]
                }
            },
            "other_solutions": {
                "past_attempts": ["cursos", "mentoria", "anúncios", "freelancers"],
                "unwanted_solutions": ["agência", "sócio", "emprego"]
            },
            "primary_transformation": {
                "perfect_solution": "Funil automatizado",
                "relationship_effects": "Mais presença em casa",
                "transformed_identity": "Empresária confiante",
                "future_success": "Faturamento previsível",
                "benefits": { "practical": ["tempo"], "emotional": ["paz"] }
            },
            "market_specifics": {
                "success_foundation": "Método validado",
                "objections": {
                    "market": ["m1", "m2", "m3", "m4", "m5"],
                    "practical": ["preço"],
                    "emotional": ["medo de falhar"]
                },
                "powerful_language": { "words": ["liberdade"], "phrases": ["você no controle"] }
            }
        }))
    }

    #[test]
    fn test_contains_all_section_headings() {
        let md = format_profile_markdown(&sample_profile());
        assert!(md.starts_with(DOCUMENT_TITLE));
        for heading in SECTION_HEADINGS {
            assert!(md.contains(heading), "missing heading {heading}");
        }
    }

    #[test]
    fn test_sections_in_order() {
        let md = format_profile_markdown(&sample_profile());
        let positions: Vec<usize> = SECTION_HEADINGS
            .iter()
            .map(|h| md.find(h).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_profile_still_formats() {
        let md = format_profile_markdown(&IdealCustomerProfile::default());
        assert!(!md.is_empty());
        for heading in SECTION_HEADINGS {
            assert!(md.contains(heading));
        }
        assert!(md.contains("- **Nome**: \n"));
    }

    #[test]
    fn test_scalars_and_lists_interpolated() {
        let md = format_profile_markdown(&sample_profile());
        assert!(md.contains("- **Nome**: Mariana\n"));
        assert!(md.contains("- **Idade**: 38\n"));
        assert!(md.contains("- **Desejos Secretos Mais Profundos**:\n  - liberdade\n  - reconhecimento\n  - tempo\n  - segurança\n"));
        assert!(md.trim_end().ends_with("  - você no controle"));
    }

    #[test]
    fn test_list_items_keep_order() {
        let profile = IdealCustomerProfile {
            main_problem: MainProblem {
                emotional_aspects: EmotionalAspects {
                    fears: vec!["primeiro".to_string(), "segundo".to_string()],
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        };
        let md = format_profile_markdown(&profile);
        let first = md.find("  - primeiro").unwrap();
        let second = md.find("  - segundo").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_html_renders_headings_and_lists() {
        let html = markdown_to_html(&format_profile_markdown(&sample_profile()));
        assert!(html.contains("<h1>Perfil Do Cliente Ideal</h1>"));
        assert!(html.contains("<h2>a) Dados Demográficos</h2>"));
        assert!(html.contains("<strong>Nome</strong>: Mariana"));
        assert!(html.contains("<ul>"));
    }

    #[test]
    fn test_html_escapes_raw_markup() {
        let html = markdown_to_html("- <script>alert(1)</script>\n\n<img src=x onerror=alert(1)>\n");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
