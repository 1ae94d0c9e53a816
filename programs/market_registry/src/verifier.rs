use anchor_lang::prelude::*;

/// Per-market name-admission policy, chosen at market creation.
///
/// A market created without a verifier (`None` in the market record) accepts
/// every name.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameVerifier {
    /// Accepts any name.
    AlwaysValid,

    /// Accepts lowercase domain names without a subdomain, e.g. "example.com".
    /// Exactly one interior dot; the labels on either side may only contain
    /// lowercase ASCII letters, digits, '-' and '_'.
    DomainNoSubdomain,
}

impl NameVerifier {
    pub fn is_valid(&self, name: &str) -> bool {
        match self {
            NameVerifier::AlwaysValid => true,
            NameVerifier::DomainNoSubdomain => is_domain_without_subdomain(name),
        }
    }
}

fn is_domain_without_subdomain(name: &str) -> bool {
    let mut parts = name.split('.');
    let (label, tld) = match (parts.next(), parts.next(), parts.next()) {
        (Some(label), Some(tld), None) => (label, tld),
        _ => return false,
    };
    !label.is_empty() && !tld.is_empty() && is_valid_label(label) && is_valid_label(tld)
}

fn is_valid_label(label: &str) -> bool {
    label
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_verifier_accepts_plain_domain() {
        let verifier = NameVerifier::DomainNoSubdomain;
        assert!(verifier.is_valid("example.com"));
        assert!(verifier.is_valid("my-site.org"));
        assert!(verifier.is_valid("under_score.io"));
        assert!(verifier.is_valid("a1.b2"));
    }

    #[test]
    fn domain_verifier_rejects_subdomains() {
        let verifier = NameVerifier::DomainNoSubdomain;
        assert!(!verifier.is_valid("some.invalid.name"));
        assert!(!verifier.is_valid("a.b.c.d"));
    }

    #[test]
    fn domain_verifier_rejects_malformed_names() {
        let verifier = NameVerifier::DomainNoSubdomain;
        assert!(!verifier.is_valid(""));
        assert!(!verifier.is_valid("nodot"));
        assert!(!verifier.is_valid(".com"));
        assert!(!verifier.is_valid("example."));
        assert!(!verifier.is_valid("."));
        assert!(!verifier.is_valid("Example.com"));
        assert!(!verifier.is_valid("exam ple.com"));
    }

    #[test]
    fn always_valid_accepts_anything() {
        let verifier = NameVerifier::AlwaysValid;
        assert!(verifier.is_valid("example.com"));
        assert!(verifier.is_valid("some.invalid.name"));
        assert!(verifier.is_valid("ANYTHING AT ALL"));
    }
}
