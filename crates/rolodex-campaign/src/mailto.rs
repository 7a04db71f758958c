//! Mail-client handoff.
//!
//! Delivery is delegated entirely to the host environment's default mail
//! handler via a `mailto:` URI; no delivery confirmation exists.

use crate::types::Campaign;

/// Build the `mailto:` URI for a finalized campaign.
///
/// Recipient addresses are comma-joined; subject and body are URL-encoded.
/// A `mailto:` link carries a single body for every recipient, so when
/// personalization is on the placeholder is substituted with the first
/// recipient's name.
pub fn mailto_uri(campaign: &Campaign) -> String {
    let to = campaign
        .recipients
        .iter()
        .map(|r| r.email.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let body = match campaign.recipients.first() {
        Some(first) => campaign.personalized_body(first),
        None => campaign.body.clone(),
    };

    format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(&campaign.subject),
        urlencoding::encode(&body)
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Recipient;
    use rolodex_core::types::Record;

    fn recipient(name: &str, email: &str) -> Recipient {
        Recipient {
            name: name.to_string(),
            email: email.to_string(),
            record: Record {
                id: "rec1".to_string(),
                fields: vec![],
            },
        }
    }

    fn campaign(recipients: Vec<Recipient>, personalize: bool) -> Campaign {
        Campaign {
            subject: "Spring offer & more".to_string(),
            body: "Hello {{name}},\nsee our new pricing.".to_string(),
            use_personalization: personalize,
            recipients,
        }
    }

    #[test]
    fn test_recipients_comma_joined() {
        let c = campaign(
            vec![recipient("Jane", "jane@x.com"), recipient("Bob", "bob@x.com")],
            false,
        );
        let uri = mailto_uri(&c);
        assert!(uri.starts_with("mailto:jane@x.com,bob@x.com?"));
    }

    #[test]
    fn test_subject_and_body_are_encoded() {
        let c = campaign(vec![recipient("Jane", "jane@x.com")], false);
        let uri = mailto_uri(&c);
        // '&' in the subject and '\n' in the body must not survive raw.
        assert!(uri.contains("subject=Spring%20offer%20%26%20more"));
        assert!(uri.contains("%0A"));
        assert!(!uri.contains("offer & more"));
    }

    #[test]
    fn test_personalized_body_uses_first_recipient() {
        let c = campaign(
            vec![recipient("Jane", "jane@x.com"), recipient("Bob", "bob@x.com")],
            true,
        );
        let uri = mailto_uri(&c);
        assert!(uri.contains(&urlencoding::encode("Hello Jane,").into_owned()));
    }

    #[test]
    fn test_placeholder_survives_without_personalization() {
        let c = campaign(vec![recipient("Jane", "jane@x.com")], false);
        let uri = mailto_uri(&c);
        assert!(uri.contains(&urlencoding::encode("{{name}}").into_owned()));
    }

    #[test]
    fn test_empty_recipient_list_still_forms_uri() {
        let c = campaign(vec![], false);
        let uri = mailto_uri(&c);
        assert!(uri.starts_with("mailto:?subject="));
    }
}
