//! Quote handoff: selections plus contact details, formatted as the subject
//! and plaintext body of a quote-request email.
//!
//! Field order is fixed and every field is always present; an empty contact
//! field renders as an empty value, never as a missing line. Escaping for a
//! transport (URL, MIME) is the composer adapter's job, not this module's.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Configuration;

/// Free-form contact fields of the quote form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub notes: String,
}

/// A quote request ready to be handed to a mail composer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRequest {
    pub configuration: Configuration,
    pub contact: ContactDetails,
}

impl QuoteRequest {
    pub fn new(configuration: Configuration, contact: ContactDetails) -> Self {
        Self {
            configuration,
            contact,
        }
    }

    /// Selections only, all contact fields empty.
    pub fn anonymous(configuration: Configuration) -> Self {
        Self::new(configuration, ContactDetails::default())
    }

    /// `Custom Coop Quote — cedar · gable/metal · 11ft · 2 levels[ · timed door]`
    pub fn subject(&self) -> String {
        let c = &self.configuration;
        let levels = c.levels().count();
        let mut subject = format!(
            "Custom Coop Quote \u{2014} {} \u{b7} {}/{} \u{b7} {}ft \u{b7} {} level{}",
            c.wood(),
            c.roof(),
            c.roof_material(),
            c.length_feet(),
            levels,
            if levels == 1 { "" } else { "s" },
        );
        if c.timed_door() {
            subject.push_str(" \u{b7} timed door");
        }
        subject
    }

    /// Plaintext body, lines joined with `\n`, no trailing newline.
    pub fn body(&self) -> String {
        let c = &self.configuration;
        let p = &self.contact;
        [
            format!("Wood: {}", c.wood()),
            format!("Roof: {}", c.roof()),
            format!("Roof Material: {}", c.roof_material()),
            format!("Levels: {}", c.levels()),
            format!("Timed Door: {}", if c.timed_door() { "Yes" } else { "No" }),
            format!("Length: {} ft", c.length_feet()),
            format!("Hardware: {}", c.hardware_finish()),
            String::new(),
            format!("Name: {}", p.name),
            format!("Email: {}", p.email),
            format!("Phone: {}", p.phone),
            format!("City: {}", p.city),
            String::new(),
            format!("Notes: {}", p.notes),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{HardwareFinish, Levels, RoofMaterial, RoofStyle, Wood};

    fn contact() -> ContactDetails {
        ContactDetails {
            name: "Ada Farmer".into(),
            email: "ada@example.com".into(),
            phone: "555-0100".into(),
            city: "Boise, ID".into(),
            notes: "12 hens".into(),
        }
    }

    #[test]
    fn subject_for_single_level_with_timer() {
        let cfg = Configuration::builder()
            .wood(Wood::Pine)
            .roof(RoofStyle::LeanTo)
            .roof_material(RoofMaterial::Wood)
            .length_feet(8)
            .levels(Levels::One)
            .timed_door(true)
            .build();
        assert_eq!(
            QuoteRequest::anonymous(cfg).subject(),
            "Custom Coop Quote — pine · lean-to/wood · 8ft · 1 level · timed door"
        );
    }

    #[test]
    fn subject_pluralises_levels_and_omits_timer() {
        let subject = QuoteRequest::anonymous(Configuration::default()).subject();
        assert_eq!(subject, "Custom Coop Quote — cedar · gable/metal · 11ft · 2 levels");
    }

    #[test]
    fn body_has_fixed_order() {
        let cfg = Configuration::builder()
            .hardware_finish(HardwareFinish::Galvanized)
            .build();
        let body = QuoteRequest::new(cfg, contact()).body();
        let expected = "Wood: cedar\n\
                        Roof: gable\n\
                        Roof Material: metal\n\
                        Levels: 2\n\
                        Timed Door: No\n\
                        Length: 11 ft\n\
                        Hardware: galvanized\n\
                        \n\
                        Name: Ada Farmer\n\
                        Email: ada@example.com\n\
                        Phone: 555-0100\n\
                        City: Boise, ID\n\
                        \n\
                        Notes: 12 hens";
        assert_eq!(body, expected);
    }

    #[test]
    fn empty_fields_are_rendered_not_omitted() {
        let body = QuoteRequest::anonymous(Configuration::default()).body();
        for label in ["Name: ", "Email: ", "Phone: ", "City: ", "Notes: "] {
            assert_eq!(
                body.lines().filter(|l| *l == label.trim_end() || *l == label).count(),
                1,
                "{label:?} missing or duplicated"
            );
        }
        assert_eq!(body.lines().count(), 14);
    }

    #[test]
    fn every_value_appears_once_in_order() {
        let req = QuoteRequest::new(Configuration::default(), contact());
        let body = req.body();
        let values = ["Ada Farmer", "ada@example.com", "555-0100", "Boise, ID", "12 hens"];
        let mut last = 0;
        for v in values {
            assert_eq!(body.matches(v).count(), 1, "{v}");
            let at = body.find(v).unwrap();
            assert!(at > last, "{v} out of order");
            last = at;
        }
    }

    #[test]
    fn raw_length_is_reported() {
        let cfg = Configuration::builder().length_feet(30).build();
        let req = QuoteRequest::anonymous(cfg);
        assert!(req.subject().contains("30ft"));
        assert!(req.body().contains("Length: 30 ft"));
    }
}
