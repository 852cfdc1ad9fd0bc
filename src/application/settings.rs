use crate::domain::operator::{MAX_OPERATOR_SLOTS, Operator, active_operators};
use crate::domain::ports::SettingsStore;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Kinds of admin settings fields the host's settings UI can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Checkbox,
    Text,
    Textarea,
}

/// A declarative admin settings field. The host renders the settings screen
/// from this schema; `default` applies when the option was never saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub key: String,
    pub title: String,
    pub kind: FieldKind,
    pub description: String,
    pub default: String,
}

/// Pre-filled operator slots. Slot 4 ships blank so a three-operator
/// merchant gets a clean default configuration.
const SLOT_DEFAULTS: [(&str, &str, &str); MAX_OPERATOR_SLOTS] = [
    (
        "Wave",
        "05000000",
        "Faites un transfert à partir de l'application",
    ),
    (
        "MTN Money",
        "05000000",
        "Faites un transfert à partir de l'application ou via USSD *133#",
    ),
    (
        "Orange Money",
        "07000000",
        "Faites un transfert à partir de l'application ou via USSD *144#",
    ),
    ("", "", ""),
];

fn text(key: impl Into<String>, title: &str, description: &str, default: &str) -> FormField {
    FormField {
        key: key.into(),
        title: title.to_string(),
        kind: FieldKind::Text,
        description: description.to_string(),
        default: default.to_string(),
    }
}

/// The admin settings schema: gateway toggles plus up to four operator
/// (name, phone, instruction) triples.
pub fn form_fields() -> Vec<FormField> {
    let mut fields = vec![
        FormField {
            key: "enabled".to_string(),
            title: "Enable/Disable".to_string(),
            kind: FieldKind::Checkbox,
            description: "Enable Mobile Money Payment".to_string(),
            default: "no".to_string(),
        },
        text(
            "title",
            "Title",
            "This controls the title which the user sees during checkout.",
            "Mobile Money",
        ),
        text("icon_url", "Icon URL", "Lien de l'icone que l'utilisateur verra", ""),
        FormField {
            key: "description".to_string(),
            title: "Description".to_string(),
            kind: FieldKind::Textarea,
            description: "This controls the description which the user sees during checkout."
                .to_string(),
            default: "Payez à partir de votre compte mobile money".to_string(),
        },
    ];

    for (i, (name, phone, instruction)) in SLOT_DEFAULTS.iter().enumerate() {
        let n = i + 1;
        fields.push(text(
            format!("operator_{n}_name"),
            &format!("Operator #{n} Name"),
            "Name of the mobile money operator (e.g., Wave, MTN Money). Leave empty to disable the slot.",
            name,
        ));
        fields.push(text(
            format!("operator_{n}_phone"),
            &format!("Operator #{n} Phone Number"),
            "Receiving phone number for this operator.",
            phone,
        ));
        fields.push(text(
            format!("operator_{n}_instruction"),
            &format!("Operator #{n} Payment Instruction"),
            "USSD code or payment instruction shown to the shopper.",
            instruction,
        ));
    }

    fields
}

/// Typed snapshot of the stored gateway options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewaySettings {
    pub enabled: bool,
    pub title: String,
    pub icon_url: String,
    pub description: String,
    /// All configured slots, active or not; always `MAX_OPERATOR_SLOTS` long.
    pub operators: Vec<Operator>,
}

impl GatewaySettings {
    /// Loads the settings snapshot, falling back to schema defaults for any
    /// option the merchant never saved.
    pub async fn load(store: &dyn SettingsStore) -> Result<Self> {
        let fields = form_fields();

        let enabled = option(store, &fields, "enabled").await? == "yes";
        let title = option(store, &fields, "title").await?;
        let icon_url = option(store, &fields, "icon_url").await?;
        let description = option(store, &fields, "description").await?;

        let mut operators = Vec::with_capacity(MAX_OPERATOR_SLOTS);
        for n in 1..=MAX_OPERATOR_SLOTS {
            operators.push(Operator {
                name: option(store, &fields, &format!("operator_{n}_name")).await?,
                phone: option(store, &fields, &format!("operator_{n}_phone")).await?,
                instruction: option(store, &fields, &format!("operator_{n}_instruction")).await?,
            });
        }

        Ok(Self {
            enabled,
            title,
            icon_url,
            description,
            operators,
        })
    }

    /// Ordered active operators derived from the configured slots.
    pub fn active_operators(&self) -> Vec<Operator> {
        active_operators(&self.operators)
    }
}

async fn option(store: &dyn SettingsStore, fields: &[FormField], key: &str) -> Result<String> {
    if let Some(value) = store.get(key).await? {
        return Ok(value);
    }
    Ok(fields
        .iter()
        .find(|field| field.key == key)
        .map(|field| field.default.clone())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemorySettingsStore;

    #[test]
    fn test_schema_covers_all_operator_slots() {
        let fields = form_fields();
        for n in 1..=MAX_OPERATOR_SLOTS {
            for suffix in ["name", "phone", "instruction"] {
                let key = format!("operator_{n}_{suffix}");
                assert!(
                    fields.iter().any(|f| f.key == key),
                    "missing schema field {key}"
                );
            }
        }
    }

    #[tokio::test]
    async fn test_load_defaults() {
        let store = InMemorySettingsStore::new();
        let settings = GatewaySettings::load(&store).await.unwrap();

        assert!(!settings.enabled);
        assert_eq!(settings.title, "Mobile Money");
        assert_eq!(settings.operators.len(), MAX_OPERATOR_SLOTS);
        // Slot 4 ships blank, so only three operators are active by default.
        let active = settings.active_operators();
        assert_eq!(active.len(), 3);
        assert_eq!(active[0].name, "Wave");
    }

    #[tokio::test]
    async fn test_load_saved_options_override_defaults() {
        let store = InMemorySettingsStore::new();
        store.set("enabled", "yes").await.unwrap();
        store.set("operator_1_name", "Moov Money").await.unwrap();
        store.set("operator_2_name", "").await.unwrap();
        store.set("operator_3_name", "").await.unwrap();

        let settings = GatewaySettings::load(&store).await.unwrap();
        assert!(settings.enabled);

        let active = settings.active_operators();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Moov Money");
        // Phone falls back to the slot default when only the name was saved.
        assert_eq!(active[0].phone, "05000000");
    }
}
