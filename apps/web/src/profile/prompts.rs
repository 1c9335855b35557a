// Prompt constants for ideal customer profile generation.
// The user message is itself a JSON document describing the expected output shape.

use serde_json::{json, Value};

/// System prompt: marketing specialist persona, JSON-only output.
pub const PROFILE_SYSTEM: &str = "Você é um especialista em marketing e pesquisa de mercado, \
    focado em criar perfis detalhados de clientes ideais. \
    Retorne apenas o JSON estruturado conforme solicitado, sem texto adicional.";

/// Prompt type tag sent alongside the input.
pub const PROFILE_PROMPT_TYPE: &str = "ideal_customer_profile";

/// Shape the model must fill. Array sizes are written as `array[n]`.
pub fn output_structure() -> Value {
    json!({
        "demographic_data": {
            "name": "string - Nome representativo do avatar",
            "age": "number - Idade do avatar",
            "brief_description": "string - Descrição resumida",
            "target_market": "string - Mercado-alvo específico",
            "avatar": "string - Descrição visual do avatar"
        },
        "main_problem": {
            "primary_issue": "string - Problema principal enfrentado",
            "secondary_issues": "array[5] - Lista de problemas secundários",
            "emotional_aspects": {
                "primary_emotions": "array[5] - Emoções principais relacionadas ao problema",
                "fears": "array[5] - Maiores medos",
                "secret_desires": "array[4] - Desejos secretos mais profundos"
            },
            "relationship_impact": {
                "fear_effects": "array[5] - Como os medos afetam relacionamentos",
                "trigger_phrases": "array[5] - Frases conversacionais que causam gatilho"
            }
        },
        "other_solutions": {
            "past_attempts": "array[4] - Soluções já tentadas",
            "unwanted_solutions": "array[3] - Soluções comuns mas indesejadas"
        },
        "primary_transformation": {
            "perfect_solution": "string - Descrição da solução ideal",
            "relationship_effects": "string - Como a solução afetaria relacionamentos",
            "transformed_identity": "string - Como se veem após a transformação",
            "future_success": "string - Visão de sucesso futuro",
            "benefits": {
                "practical": "array - Lista de benefícios práticos",
                "emotional": "array - Lista de benefícios emocionais"
            }
        },
        "market_specifics": {
            "success_foundation": "string - Base para o sucesso",
            "objections": {
                "market": "array[5] - Principais objeções do mercado",
                "practical": "array - Objeções práticas",
                "emotional": "array - Objeções emocionais"
            },
            "powerful_language": {
                "words": "array - Palavras com forte impacto",
                "phrases": "array - Frases com forte impacto"
            }
        }
    })
}

/// Builds the user message: `{type, input: {biography, additionalContext}, output_structure}`.
pub fn build_profile_prompt(biography: &str, additional_context: &str) -> String {
    json!({
        "type": PROFILE_PROMPT_TYPE,
        "input": {
            "biography": biography,
            "additionalContext": additional_context,
        },
        "output_structure": output_structure(),
    })
    .to_string()
}
