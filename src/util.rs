// Small helpers shared by the engines and components

const DIE_GLYPHS: [&str; 6] = ["⚀", "⚁", "⚂", "⚃", "⚄", "⚅"];

/// Unicode die face for 1..=6; anything else shows the blank-start face.
pub fn die_glyph(value: u8) -> &'static str {
    match value {
        1..=6 => DIE_GLYPHS[(value - 1) as usize],
        _ => DIE_GLYPHS[0],
    }
}

/// Joins face values the way the results list prints them: `3 + 5 + 1`.
pub fn join_rolls(values: &[u8]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    let _ = msg; // no console outside the browser
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_follow_face_values() {
        assert_eq!(die_glyph(1), "⚀");
        assert_eq!(die_glyph(6), "⚅");
        assert_eq!(die_glyph(0), "⚀");
    }

    #[test]
    fn rolls_join_with_plus() {
        assert_eq!(join_rolls(&[3, 5, 1]), "3 + 5 + 1");
        assert_eq!(join_rolls(&[4]), "4");
        assert_eq!(join_rolls(&[]), "");
    }
}
