//! Video id extraction from known URL shapes

/// Extract an 11-character video id from a URL or bare id.
///
/// Recognized shapes:
/// - `https://www.youtube.com/watch?v=ID` (extra query params tolerated)
/// - `https://youtu.be/ID`
/// - `https://www.youtube.com/embed/ID`
/// - `https://www.youtube.com/shorts/ID`
/// - a bare 11-character id
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    if let Some(rest) = input.split("watch?v=").nth(1) {
        return take_id(rest);
    }
    for marker in ["youtu.be/", "/embed/", "/shorts/"] {
        if let Some(rest) = input.split(marker).nth(1) {
            return take_id(rest);
        }
    }

    // Bare id: exactly 11 chars of the id alphabet
    if input.len() == 11 && input.chars().all(is_id_char) {
        return Some(input.to_string());
    }

    None
}

fn take_id(rest: &str) -> Option<String> {
    let id: String = rest.chars().take_while(|c| is_id_char(*c)).collect();
    if id.len() == 11 {
        Some(id)
    } else {
        None
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
