//! Ordinal color assignment over a 20-hue categorical palette.

/// The classic 20-color categorical palette, paired light/dark hues.
pub const CATEGORY20: [&str; 20] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
    "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
    "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

/// Hands each distinct key the next palette entry and keeps the assignment
/// stable across redraws. Wraps around past twenty keys.
#[derive(Debug, Clone, Default)]
pub struct ColorScale {
    assigned: Vec<String>,
}

impl ColorScale {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&mut self, key: &str) -> &'static str {
        let idx = match self.assigned.iter().position(|k| k == key) {
            Some(idx) => idx,
            None => {
                self.assigned.push(key.to_string());
                self.assigned.len() - 1
            }
        };
        CATEGORY20[idx % CATEGORY20.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_key_always_gets_same_color() {
        let mut scale = ColorScale::new();
        let first = scale.color("src");
        scale.color("lib");
        assert_eq!(scale.color("src"), first);
    }

    #[test]
    fn distinct_keys_get_distinct_colors() {
        let mut scale = ColorScale::new();
        assert_ne!(scale.color("a"), scale.color("b"));
    }

    #[test]
    fn palette_wraps_after_twenty_keys() {
        let mut scale = ColorScale::new();
        let first = scale.color("key-0");
        for i in 1..20 {
            scale.color(&format!("key-{i}"));
        }
        assert_eq!(scale.color("key-20"), first);
    }
}
