//! Seasonal Decoration
//!
//! Layout of the snowfall and pine rows behind the top bar. Randomness is
//! injected so layouts are reproducible in tests; the browser passes
//! `js_sys::Math::random`.

pub const SNOWFLAKE_COUNT: usize = 200;

/// (trees per row, max upward offset in px) from back to front
pub const PINE_LAYERS: [(usize, f64); 3] = [(10, 2.0), (14, 3.0), (18, 4.0)];

#[derive(Debug, Clone, PartialEq)]
pub struct Snowflake {
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub font_px: f64,
}

impl Snowflake {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s; font-size: {:.1}px;",
            self.left_pct, self.duration_s, self.delay_s, self.font_px
        )
    }
}

/// `rng` yields values in [0, 1)
pub fn snowflakes(count: usize, mut rng: impl FnMut() -> f64) -> Vec<Snowflake> {
    (0..count)
        .map(|_| Snowflake {
            left_pct: rng() * 100.0,
            duration_s: 25.0 + rng() * 15.0,
            delay_s: rng() * 10.0,
            font_px: rng() * 10.0 + 8.0,
        })
        .collect()
}

/// Vertical offsets (px, <= 0) for each tree of each layer
pub fn pine_rows(mut rng: impl FnMut() -> f64) -> Vec<Vec<f64>> {
    PINE_LAYERS
        .iter()
        .map(|(trees, max_offset)| (0..*trees).map(|_| -(rng() * max_offset)).collect())
        .collect()
}

/// Greeting split into individually lit characters; spaces become NBSP so
/// inline-block spans keep their gaps
pub fn light_chars(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| if c == ' ' { '\u{00A0}' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn test_snowflake_ranges() {
        let low = snowflakes(3, fixed(0.0));
        assert_eq!(low.len(), 3);
        assert_eq!(low[0].left_pct, 0.0);
        assert_eq!(low[0].duration_s, 25.0);
        assert_eq!(low[0].delay_s, 0.0);
        assert_eq!(low[0].font_px, 8.0);

        let high = snowflakes(1, fixed(0.999));
        assert!(high[0].left_pct < 100.0);
        assert!(high[0].duration_s < 40.0);
        assert!(high[0].delay_s < 10.0);
        assert!(high[0].font_px < 18.0);
    }

    #[test]
    fn test_snowflake_style() {
        let flake = snowflakes(1, fixed(0.5)).remove(0);
        assert_eq!(
            flake.style(),
            "left: 50.00%; animation-duration: 32.50s; animation-delay: 5.00s; font-size: 13.0px;"
        );
    }

    #[test]
    fn test_pine_rows_shape() {
        let rows = pine_rows(fixed(0.5));
        let counts: Vec<usize> = rows.iter().map(Vec::len).collect();
        assert_eq!(counts, vec![10, 14, 18]);
        assert_eq!(rows[0][0], -1.0);
        assert_eq!(rows[2][0], -2.0);
    }

    #[test]
    fn test_light_chars_keep_spaces() {
        assert_eq!(light_chars("Hola Ana"), vec!['H', 'o', 'l', 'a', '\u{00A0}', 'A', 'n', 'a']);
    }
}
