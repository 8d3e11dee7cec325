//! Process exit codes

use clickup::ErrorKind;

/// Command completed.
pub const SUCCESS: u8 = 0;
/// Local failure: bad input, config file, I/O, or an undecodable response.
pub const LOCAL: u8 = 1;
/// Invalid command line. Raised by clap itself.
pub const USAGE: u8 = 2;
/// The API answered with an error status.
pub const API: u8 = 3;
/// The API could not be reached, or the call was cancelled or timed out.
pub const TRANSPORT: u8 = 4;

/// Exit code for a failed command.
pub fn code_for(error: &anyhow::Error) -> u8 {
    match client_error(error).map(clickup::Error::kind) {
        Some(ErrorKind::Api) => API,
        Some(ErrorKind::Transport) => TRANSPORT,
        Some(ErrorKind::Validation | ErrorKind::Decode) | None => LOCAL,
    }
}

/// Suggestion printed after the error, when one applies.
pub fn hint_for(error: &anyhow::Error) -> Option<&'static str> {
    let error = client_error(error)?;
    if error.status_code() == Some(401) {
        return Some("check your token, or run `clickup auth set-key <KEY>`");
    }
    if is_missing(error, "team_id") {
        return Some("pass --team, set CLICKUP_TEAM_ID, or run `clickup auth set-key <KEY> --default-team <ID>`");
    }
    None
}

fn client_error(error: &anyhow::Error) -> Option<&clickup::Error> {
    error.chain().find_map(|cause| cause.downcast_ref::<clickup::Error>())
}

fn is_missing(error: &clickup::Error, name: &str) -> bool {
    match error {
        clickup::Error::MissingIdentifier(missing) => *missing == name,
        clickup::Error::WithContext { source, .. } => is_missing(source, name),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use clickup::ApiError;

    #[test]
    fn test_api_error_code_and_hint() {
        let error = anyhow::Error::new(
            clickup::Error::Api(ApiError::new(401, "Token invalid")).context("list teams"),
        );
        assert_eq!(code_for(&error), API);
        assert!(hint_for(&error).unwrap().contains("auth set-key"));
    }

    #[test]
    fn test_forbidden_has_no_hint() {
        let error = anyhow::Error::new(clickup::Error::Api(ApiError::new(403, "forbidden")));
        assert_eq!(code_for(&error), API);
        assert_eq!(hint_for(&error), None);
    }

    #[test]
    fn test_transport_errors() {
        assert_eq!(code_for(&anyhow::Error::new(clickup::Error::Cancelled)), TRANSPORT);
        assert_eq!(
            code_for(&anyhow::Error::new(clickup::Error::DeadlineExceeded)),
            TRANSPORT
        );
    }

    #[test]
    fn test_local_errors() {
        let missing = anyhow::Error::new(clickup::Error::MissingIdentifier("team_id"));
        assert_eq!(code_for(&missing), LOCAL);
        assert!(hint_for(&missing).unwrap().contains("--team"));

        let other = anyhow::anyhow!("reading config file");
        assert_eq!(code_for(&other), LOCAL);
        assert_eq!(hint_for(&other), None);
    }

    #[test]
    fn test_error_found_under_anyhow_context() {
        let result: Result<(), clickup::Error> =
            Err(clickup::Error::Api(ApiError::new(500, "Internal Server Error")));
        let error = result.context("running command").unwrap_err();
        assert_eq!(code_for(&error), API);
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [SUCCESS, LOCAL, USAGE, API, TRANSPORT];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
