//! Embedded Checkout Configuration
//!
//! Everything handed to the externally rendered payment form: order
//! credentials, payment options and appearance.

use serde::Serialize;

use crate::order::Order;

const FONT_FAMILY: &str = "Inter, sans-serif";
const FOCUS_BORDER: &str = "#0074D9";

/// Theme colours resolved once when the checkout mounts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: String,
    pub primary_hover: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#000000".into(),
            primary_hover: "#333333".into(),
        }
    }
}

impl ThemeColors {
    /// Use resolved values where present, fallbacks elsewhere
    pub fn resolve(primary: Option<&str>, primary_hover: Option<&str>) -> Self {
        let fallback = Self::default();
        let pick = |value: Option<&str>, default: String| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map_or(default, str::to_string)
        };

        Self {
            primary: pick(primary, fallback.primary),
            primary_hover: pick(primary_hover, fallback.primary_hover),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontRule {
    pub family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateRule {
    pub colors: ColorRule,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    Hidden,
}

/// Styling for one category of form element
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<StateRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<StateRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<StateRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
}

impl ElementRule {
    fn hidden() -> Self {
        Self {
            display: Some(Display::Hidden),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppearanceRules {
    pub label: ElementRule,
    pub input: ElementRule,
    pub primary_button: ElementRule,
    pub destination_input: ElementRule,
    pub receipt_email_input: ElementRule,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariableColors {
    pub accent: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppearanceVariables {
    pub colors: VariableColors,
}

/// Appearance object passed to the payment form
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckoutAppearance {
    pub rules: AppearanceRules,
    pub variables: AppearanceVariables,
}

impl Default for CheckoutAppearance {
    fn default() -> Self {
        Self::themed(&ThemeColors::default())
    }
}

impl CheckoutAppearance {
    /// Fixed layout and typography, coloured by the page theme.
    ///
    /// Destination and receipt email inputs are hidden: both come from the page.
    pub fn themed(theme: &ThemeColors) -> Self {
        let label = ElementRule {
            font: Some(FontRule {
                family: FONT_FAMILY.into(),
                size: Some("14px".into()),
                weight: Some("500".into()),
            }),
            colors: Some(ColorRule {
                text: Some("#374151".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let input = ElementRule {
            border_radius: Some("8px".into()),
            font: Some(FontRule {
                family: FONT_FAMILY.into(),
                size: Some("16px".into()),
                weight: Some("400".into()),
            }),
            colors: Some(ColorRule {
                text: Some("#000000".into()),
                background: Some("#FFFFFF".into()),
                border: Some("#E0E0E0".into()),
                box_shadow: Some("none".into()),
                placeholder: Some("#999999".into()),
            }),
            hover: Some(StateRule {
                colors: ColorRule {
                    border: Some(FOCUS_BORDER.into()),
                    ..Default::default()
                },
            }),
            focus: Some(StateRule {
                colors: ColorRule {
                    border: Some(FOCUS_BORDER.into()),
                    box_shadow: Some("none".into()),
                    ..Default::default()
                },
            }),
            ..Default::default()
        };

        let primary_button = ElementRule {
            font: Some(FontRule {
                family: FONT_FAMILY.into(),
                ..Default::default()
            }),
            colors: Some(ColorRule {
                background: Some(theme.primary.clone()),
                ..Default::default()
            }),
            hover: Some(StateRule {
                colors: ColorRule {
                    background: Some(theme.primary_hover.clone()),
                    ..Default::default()
                },
            }),
            disabled: Some(StateRule {
                colors: ColorRule {
                    background: Some("#F1F5F9".into()),
                    ..Default::default()
                },
            }),
            ..Default::default()
        };

        Self {
            rules: AppearanceRules {
                label,
                input,
                primary_button,
                destination_input: ElementRule::hidden(),
                receipt_email_input: ElementRule::hidden(),
            },
            variables: AppearanceVariables {
                colors: VariableColors {
                    accent: theme.primary.clone(),
                },
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MethodToggle {
    pub enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethodKind {
    Fiat,
    Crypto,
}

/// Payment options: card (fiat) only
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfig {
    pub receipt_email: String,
    pub crypto: MethodToggle,
    pub fiat: MethodToggle,
    pub default_method: PaymentMethodKind,
}

impl PaymentConfig {
    pub fn fiat_only(receipt_email: impl Into<String>) -> Self {
        Self {
            receipt_email: receipt_email.into(),
            crypto: MethodToggle { enabled: false },
            fiat: MethodToggle { enabled: true },
            default_method: PaymentMethodKind::Fiat,
        }
    }
}

/// Everything the embedded checkout is mounted with
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedCheckoutProps {
    pub order_id: String,
    pub client_secret: String,
    pub payment: PaymentConfig,
    pub appearance: CheckoutAppearance,
}

impl EmbeddedCheckoutProps {
    pub fn new(order: &Order, receipt_email: &str, appearance: &CheckoutAppearance) -> Self {
        Self {
            order_id: order.order_id.clone(),
            client_secret: order.client_secret.clone(),
            payment: PaymentConfig::fiat_only(receipt_email),
            appearance: appearance.clone(),
        }
    }

    /// JSON handed to the SDK bridge
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
