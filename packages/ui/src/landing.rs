//! Landing page search box.

use crate::browser::path_with_query;

pub const MSG_EMPTY_LOCATION: &str = "Please enter a location to search";
pub const MSG_SEARCHING: &str = "Searching for PGs...";

/// Search page URL for the typed location, or the warning to show.
pub fn landing_target(input: &str) -> Result<String, &'static str> {
    let location = input.trim();
    if location.is_empty() {
        return Err(MSG_EMPTY_LOCATION);
    }
    Ok(path_with_query("/search", "q", location))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_location_warns() {
        assert_eq!(landing_target("   "), Err(MSG_EMPTY_LOCATION));
        assert_eq!(landing_target(""), Err(MSG_EMPTY_LOCATION));
    }

    #[test]
    fn test_location_is_trimmed_and_encoded() {
        assert_eq!(
            landing_target("  Koramangala, Bangalore ").unwrap(),
            "/search?q=Koramangala%2C+Bangalore"
        );
    }
}
