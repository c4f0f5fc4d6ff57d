/// Local keyword responder for the advisor chat panel. This is deliberately
/// not the remote classifier: free-text questions get a canned reply based
/// on substring matching, with no network call.

const LINK_TRIGGERS: &[&str] = &["http", "scam", ".exe", "free"];

pub const LINK_WARNING: &str =
    "That looks dangerous. Stay away from links like that!";
pub const PASSWORD_TIP: &str =
    "Use a strong password: a mix of letters, numbers and symbols.";
pub const REASSURANCE: &str =
    "All good, nothing to worry about.";

pub fn respond(message: &str) -> &'static str {
    let text = message.to_lowercase();
    if LINK_TRIGGERS.iter().any(|t| text.contains(t)) {
        LINK_WARNING
    } else if text.contains("password") {
        PASSWORD_TIP
    } else {
        REASSURANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_triggers() {
        assert_eq!(respond("is http://foo.bar safe?"), LINK_WARNING);
        assert_eq!(respond("I got a FREE offer"), LINK_WARNING);
        assert_eq!(respond("someone sent me setup.exe"), LINK_WARNING);
        assert_eq!(respond("is this a scam?"), LINK_WARNING);
    }

    #[test]
    fn test_password_tip() {
        assert_eq!(respond("how do I pick a Password?"), PASSWORD_TIP);
    }

    #[test]
    fn test_default_reassurance() {
        assert_eq!(respond("hello there"), REASSURANCE);
    }
}
