/// Coarse check used by the signup form: present, non-empty, contains `@`.
///
/// Deliberately loose. The value is neither trimmed nor parsed as an RFC 5322
/// address, so `"a@"` passes and `"   "` fails.
pub fn is_plausible_email(email: &str) -> bool {
    !email.is_empty() && email.contains('@')
}
