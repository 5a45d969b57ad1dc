use crate::domain::model::{ConsultationRequest, Service};

pub const CLOSING_LINE: &str = "Best regards";

/// Builds the consultation e-mail for `service`, addressed to `recipient`.
pub fn compose(service: &Service, recipient: &str) -> ConsultationRequest {
    let subject = format!("Consultation Request for {}", service.title);
    let body = format!(
        "Hello,\n\n\
         I am interested in learning more about your {title} service.\n\n\
         Please contact me to schedule a consultation.\n\n\
         Service Details:\n\
         - Service: {title}\n\
         - Price: {price}/month\n\n\
         Looking forward to hearing from you.\n\n\
         {closing}",
        title = service.title,
        price = service.price,
        closing = CLOSING_LINE,
    );

    ConsultationRequest {
        recipient: recipient.to_string(),
        subject,
        body,
    }
}

/// `mailto:` link for `address` alone, with the local part percent-encoded.
pub fn mailto_address(address: &str) -> String {
    match address.rsplit_once('@') {
        Some((local, domain)) => format!("mailto:{}@{}", urlencoding::encode(local), domain),
        None => format!("mailto:{}", urlencoding::encode(address)),
    }
}

impl ConsultationRequest {
    /// `mailto:` link with recipient, subject and body percent-encoded.
    pub fn mailto_uri(&self) -> String {
        format!(
            "{}?subject={}&body={}",
            mailto_address(&self.recipient),
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::test_support::service;
    use url::Url;

    const RECIPIENT: &str = "office@example.ca";

    #[test]
    fn test_sat_preparation_request() {
        let sat = service(2, "SAT Preparation", 600);
        let request = compose(&sat, RECIPIENT);

        assert_eq!(request.recipient, RECIPIENT);
        assert_eq!(request.subject, "Consultation Request for SAT Preparation");
        assert!(request.body.contains("Price: $600/month"));
        assert!(request.body.contains("- Service: SAT Preparation"));
        assert!(request.body.ends_with(CLOSING_LINE));
    }

    #[test]
    fn test_mailto_uri_encodes_reserved_characters() {
        let tricky = service(7, "Math & Science? 100%", 450);
        let uri = compose(&tricky, RECIPIENT).mailto_uri();

        assert!(uri.starts_with("mailto:office@example.ca?subject="));
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
        assert!(uri.contains("Math%20%26%20Science%3F%20100%25"));
        assert_eq!(uri.matches('&').count(), 1);
        assert_eq!(uri.matches('?').count(), 1);
    }

    #[test]
    fn test_mailto_uri_decodes_back_to_request() {
        let request = compose(&service(3, "University Counselling", 800), RECIPIENT);
        let url = Url::parse(&request.mailto_uri()).unwrap();

        assert_eq!(url.scheme(), "mailto");
        assert_eq!(url.path(), RECIPIENT);

        let pairs: std::collections::HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs["subject"], request.subject);
        assert_eq!(pairs["body"], request.body);
    }

    #[test]
    fn test_recipient_local_part_is_encoded() {
        let request = compose(&service(1, "Alberta Curriculum", 500), "sales%26x@example.ca");
        let uri = request.mailto_uri();

        assert!(uri.starts_with("mailto:sales%2526x@example.ca?subject="));
        assert_eq!(uri.matches('&').count(), 1);

        let url = Url::parse(&uri).unwrap();
        let decoded = urlencoding::decode(url.path()).unwrap();
        assert_eq!(decoded, "sales%26x@example.ca");
    }

    #[test]
    fn test_mailto_address_keeps_plain_addresses() {
        assert_eq!(mailto_address(RECIPIENT), "mailto:office@example.ca");
        assert_eq!(mailto_address("a+b@example.ca"), "mailto:a%2Bb@example.ca");
    }
}
