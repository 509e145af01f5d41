/// Turns a raw remote error message into login copy fit for an end user.
pub fn normalize_admin_auth_error(message: &str) -> &'static str {
    let lower = message.to_lowercase();

    if ["unauthorized", "role", "permission", "assign"]
        .iter()
        .any(|needle| lower.contains(needle))
    {
        return "Login failed. Please check your credentials and try again.";
    }

    if lower.contains("session") {
        return "Session error. Please try logging in again.";
    }

    "An error occurred during login. Please try again."
}
