//! The symptom-checker tree shipped with the engine.
//!
//! Each branch starts from one of the root's symptom categories and narrows
//! down to an outcome node. Question nodes are shared between branches where
//! two answers lead to the same follow-up question.

use super::tree::{GraphDefinition, NodeDefinition};
use crate::graph::Severity;

/// Id of the root question of the built-in tree.
pub const ROOT_ID: &str = "root";

/// Returns the definition of the built-in symptom tree.
pub fn symptom_tree() -> GraphDefinition {
    GraphDefinition::new(ROOT_ID, nodes())
}

fn nodes() -> Vec<NodeDefinition> {
    vec![
        NodeDefinition::question(
            "root",
            "What is your main symptom?",
            &["fever", "pain", "respiratory", "digestive", "skin", "other"],
        ),
        // Fever
        NodeDefinition::question(
            "fever",
            "Do you have a fever?",
            &["fever-high", "fever-low"],
        ),
        NodeDefinition::question(
            "fever-high",
            "Is your temperature above 39°C/102°F?",
            &["fever-high-other", "fever-moderate-other"],
        ),
        NodeDefinition::question(
            "fever-low",
            "Is your temperature between 37.5-38.9°C/99.5-102°F?",
            &["fever-moderate-other", "fever-low-duration"],
        ),
        NodeDefinition::question(
            "fever-high-other",
            "Do you also have a severe headache, stiff neck, or confusion?",
            &["fever-emergency", "fever-high-duration"],
        ),
        NodeDefinition::question(
            "fever-moderate-other",
            "Do you also have a rash or difficulty breathing?",
            &["fever-urgent", "fever-moderate-duration"],
        ),
        NodeDefinition::question(
            "fever-low-duration",
            "Has the fever lasted more than 3 days?",
            &["fever-moderate-duration", "fever-mild"],
        ),
        NodeDefinition::question(
            "fever-high-duration",
            "Has the high fever lasted more than 24 hours?",
            &["fever-urgent", "fever-moderate"],
        ),
        NodeDefinition::question(
            "fever-moderate-duration",
            "Has the fever lasted more than 5 days?",
            &["fever-urgent", "fever-moderate"],
        ),
        NodeDefinition::outcome(
            "fever-emergency",
            "This could be a medical emergency.",
            Severity::Severe,
            "Seek medical attention immediately. These symptoms could indicate a serious condition such as meningitis.",
            true,
        ),
        NodeDefinition::outcome(
            "fever-urgent",
            "This requires urgent medical attention.",
            Severity::Moderate,
            "You should see a healthcare provider within 24 hours. Until then, take fever reducers as directed, rest, and drink plenty of fluids.",
            true,
        ),
        NodeDefinition::outcome(
            "fever-moderate",
            "This requires attention but is not an emergency.",
            Severity::Moderate,
            "Take fever reducers as directed, rest, and drink plenty of fluids. If symptoms worsen or don't improve in 48 hours, seek medical attention.",
            true,
        ),
        NodeDefinition::outcome(
            "fever-mild",
            "This appears to be a mild fever.",
            Severity::Mild,
            "Rest, stay hydrated, and take over-the-counter fever reducers as directed. Monitor for any changes in symptoms.",
            false,
        ),
        // Pain
        NodeDefinition::question(
            "pain",
            "Where is your pain located?",
            &["pain-head", "pain-chest"],
        ),
        NodeDefinition::question(
            "pain-head",
            "Do you have a headache?",
            &["pain-head-severe", "pain-head-moderate"],
        ),
        NodeDefinition::question(
            "pain-head-severe",
            "Is your headache the worst you've ever experienced, or did it come on suddenly and severely?",
            &["pain-head-emergency", "pain-head-features"],
        ),
        NodeDefinition::question(
            "pain-head-moderate",
            "Have you had this headache for more than 3 days?",
            &["pain-head-persistent", "pain-head-features"],
        ),
        NodeDefinition::question(
            "pain-head-features",
            "Do you also have fever, stiff neck, or sensitivity to light?",
            &["pain-head-urgent", "pain-head-common"],
        ),
        NodeDefinition::outcome(
            "pain-head-emergency",
            "This could be a medical emergency.",
            Severity::Severe,
            "Seek immediate medical attention. A sudden, severe headache could indicate a serious condition such as a stroke or aneurysm.",
            true,
        ),
        NodeDefinition::outcome(
            "pain-head-urgent",
            "This requires urgent medical attention.",
            Severity::Moderate,
            "You should see a healthcare provider within 24 hours. These symptoms could indicate an infection or other serious condition.",
            true,
        ),
        NodeDefinition::outcome(
            "pain-head-persistent",
            "This persistent headache should be evaluated.",
            Severity::Moderate,
            "Make an appointment with a healthcare provider. In the meantime, you can try over-the-counter pain relievers and rest in a quiet, dark room.",
            true,
        ),
        NodeDefinition::outcome(
            "pain-head-common",
            "This appears to be a common headache.",
            Severity::Mild,
            "Rest, stay hydrated, and take over-the-counter pain relievers as directed. If the headache worsens or doesn't improve in 48 hours, consult a healthcare provider.",
            false,
        ),
        // Chest pain
        NodeDefinition::question(
            "pain-chest",
            "Are you experiencing chest pain?",
            &["pain-chest-severe", "pain-chest-moderate"],
        ),
        NodeDefinition::question(
            "pain-chest-severe",
            "Is the pain crushing, squeezing, or accompanied by shortness of breath, sweating, or nausea?",
            &["pain-chest-emergency", "pain-chest-features"],
        ),
        NodeDefinition::question(
            "pain-chest-moderate",
            "Does the pain get worse when you take a deep breath or cough?",
            &["pain-chest-respiratory", "pain-chest-features"],
        ),
        NodeDefinition::question(
            "pain-chest-features",
            "Have you had this pain for more than 24 hours?",
            &["pain-chest-persistent", "pain-chest-new"],
        ),
        NodeDefinition::outcome(
            "pain-chest-emergency",
            "This could be a medical emergency.",
            Severity::Severe,
            "Seek immediate medical attention. These symptoms could indicate a heart attack or other life-threatening condition.",
            true,
        ),
        NodeDefinition::outcome(
            "pain-chest-respiratory",
            "This could be related to respiratory issues.",
            Severity::Moderate,
            "You should see a healthcare provider within 24 hours. In the meantime, rest and avoid strenuous activities.",
            true,
        ),
        NodeDefinition::outcome(
            "pain-chest-persistent",
            "This persistent chest pain should be evaluated.",
            Severity::Moderate,
            "Make an appointment with a healthcare provider. Persistent chest pain can indicate various conditions that need proper diagnosis.",
            true,
        ),
        NodeDefinition::outcome(
            "pain-chest-new",
            "This new chest pain should be evaluated.",
            Severity::Moderate,
            "If the pain is mild and not accompanied by other serious symptoms, monitor it closely. If it worsens or doesn't improve in 24 hours, consult a healthcare provider.",
            true,
        ),
        // Respiratory
        NodeDefinition::question(
            "respiratory",
            "Are you having difficulty breathing?",
            &["respiratory-severe", "respiratory-moderate"],
        ),
        NodeDefinition::question(
            "respiratory-severe",
            "Are you struggling to catch your breath, or are your lips or face turning blue?",
            &["respiratory-emergency", "respiratory-features"],
        ),
        NodeDefinition::question(
            "respiratory-moderate",
            "Are you feeling short of breath with minimal exertion?",
            &["respiratory-urgent", "respiratory-mild"],
        ),
        NodeDefinition::question(
            "respiratory-features",
            "Do you also have a fever, cough, or chest pain?",
            &["respiratory-urgent", "respiratory-mild"],
        ),
        NodeDefinition::outcome(
            "respiratory-emergency",
            "This could be a medical emergency.",
            Severity::Severe,
            "Seek immediate medical attention. Severe breathing difficulties can be life-threatening.",
            true,
        ),
        NodeDefinition::outcome(
            "respiratory-urgent",
            "This requires urgent medical attention.",
            Severity::Moderate,
            "You should see a healthcare provider within 24 hours. These symptoms could indicate an infection or other serious respiratory condition.",
            true,
        ),
        NodeDefinition::outcome(
            "respiratory-mild",
            "This appears to be a mild respiratory issue.",
            Severity::Mild,
            "Rest, stay hydrated, and monitor your symptoms. If they worsen or don't improve in 48 hours, consult a healthcare provider.",
            false,
        ),
        // Digestive
        NodeDefinition::question(
            "digestive",
            "Are you experiencing digestive issues?",
            &["digestive-severe", "digestive-moderate"],
        ),
        NodeDefinition::question(
            "digestive-severe",
            "Are you experiencing severe abdominal pain, persistent vomiting, or blood in your stool?",
            &["digestive-emergency", "digestive-features"],
        ),
        NodeDefinition::question(
            "digestive-moderate",
            "Have you had diarrhea or vomiting for more than 24 hours?",
            &["digestive-dehydration", "digestive-mild"],
        ),
        NodeDefinition::question(
            "digestive-features",
            "Do you also have a fever or are you unable to keep fluids down?",
            &["digestive-urgent", "digestive-mild"],
        ),
        NodeDefinition::outcome(
            "digestive-emergency",
            "This could be a medical emergency.",
            Severity::Severe,
            "Seek immediate medical attention. These symptoms could indicate a serious digestive condition.",
            true,
        ),
        NodeDefinition::outcome(
            "digestive-dehydration",
            "You may be at risk of dehydration.",
            Severity::Moderate,
            "Try to drink clear fluids with electrolytes. If you're unable to keep fluids down or if symptoms persist, consult a healthcare provider.",
            true,
        ),
        NodeDefinition::outcome(
            "digestive-urgent",
            "This requires urgent medical attention.",
            Severity::Moderate,
            "You should see a healthcare provider within 24 hours. These symptoms could indicate an infection or other serious condition.",
            true,
        ),
        NodeDefinition::outcome(
            "digestive-mild",
            "This appears to be a mild digestive issue.",
            Severity::Mild,
            "Rest, stay hydrated, and consider a bland diet. If symptoms worsen or don't improve in 48 hours, consult a healthcare provider.",
            false,
        ),
        // Skin
        NodeDefinition::question(
            "skin",
            "Are you experiencing skin issues?",
            &["skin-severe", "skin-moderate"],
        ),
        NodeDefinition::question(
            "skin-severe",
            "Do you have a widespread rash that came on suddenly with fever or difficulty breathing?",
            &["skin-emergency", "skin-features"],
        ),
        NodeDefinition::question(
            "skin-moderate",
            "Is the rash painful, blistering, or spreading rapidly?",
            &["skin-urgent", "skin-mild"],
        ),
        NodeDefinition::question(
            "skin-features",
            "Is the affected area red, warm, swollen, or increasingly painful?",
            &["skin-infection", "skin-mild"],
        ),
        NodeDefinition::outcome(
            "skin-emergency",
            "This could be a medical emergency.",
            Severity::Severe,
            "Seek immediate medical attention. These symptoms could indicate a severe allergic reaction or other serious condition.",
            true,
        ),
        NodeDefinition::outcome(
            "skin-urgent",
            "This requires urgent medical attention.",
            Severity::Moderate,
            "You should see a healthcare provider within 24 hours. These symptoms could indicate an infection or other serious skin condition.",
            true,
        ),
        NodeDefinition::outcome(
            "skin-infection",
            "This could be a skin infection.",
            Severity::Moderate,
            "Make an appointment with a healthcare provider. In the meantime, keep the area clean and avoid scratching or irritating it further.",
            true,
        ),
        NodeDefinition::outcome(
            "skin-mild",
            "This appears to be a mild skin issue.",
            Severity::Mild,
            "Keep the area clean and dry. Avoid potential irritants like harsh soaps. If the condition worsens or doesn't improve in 48 hours, consult a healthcare provider.",
            false,
        ),
        // Other (catch-all)
        NodeDefinition::question(
            "other",
            "Are you experiencing other concerning symptoms?",
            &["other-severe", "other-moderate"],
        ),
        NodeDefinition::question(
            "other-severe",
            "Are your symptoms severe, or have they come on suddenly?",
            &["other-urgent", "other-duration"],
        ),
        NodeDefinition::question(
            "other-moderate",
            "Have your symptoms been persistent or gradually worsening?",
            &["other-duration", "other-mild"],
        ),
        NodeDefinition::question(
            "other-duration",
            "Have you had these symptoms for more than 7 days?",
            &["other-persistent", "other-new"],
        ),
        NodeDefinition::outcome(
            "other-urgent",
            "These symptoms require medical attention.",
            Severity::Moderate,
            "You should see a healthcare provider within 24 hours to evaluate these concerning symptoms.",
            true,
        ),
        NodeDefinition::outcome(
            "other-persistent",
            "These persistent symptoms should be evaluated.",
            Severity::Moderate,
            "Make an appointment with a healthcare provider to evaluate these ongoing symptoms.",
            true,
        ),
        NodeDefinition::outcome(
            "other-new",
            "These new symptoms should be monitored.",
            Severity::Mild,
            "Monitor your symptoms closely. If they worsen or don't improve in the next few days, consult a healthcare provider.",
            false,
        ),
        NodeDefinition::outcome(
            "other-mild",
            "These appear to be mild symptoms.",
            Severity::Mild,
            "Rest and monitor your symptoms. If they worsen or don't improve in 48 hours, consult a healthcare provider.",
            false,
        ),
    ]
}
