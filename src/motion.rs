// Pure helpers behind the decorative motion layer. None of this touches page data.

const GOLDEN: f64 = 0.618_033_988_749_895;
const PLASTIC: f64 = 0.754_877_666_246_693;

/// Vertical shift of the hero background for the current scroll position.
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y.max(0.0) * factor
}

/// Cursor position inside a box, in percent of its width and height.
/// Falls back to the center for a collapsed box.
pub fn glow_position(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (50.0, 50.0);
    }
    let x = ((client_x - left) / width * 100.0).clamp(0.0, 100.0);
    let y = ((client_y - top) / height * 100.0).clamp(0.0, 100.0);
    (x, y)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {}px; height: {}px; animation-delay: {:.1}s; animation-duration: {:.1}s;",
            self.left_pct, self.top_pct, self.size_px, self.size_px, self.delay_s, self.duration_s
        )
    }
}

/// Evenly spread, deterministic particle layout (R2 low-discrepancy sequence),
/// so the background looks the same on every render.
pub fn particles(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let n = i as f64 + 1.0;
            Particle {
                left_pct: (n * GOLDEN).fract() * 100.0,
                top_pct: (n * PLASTIC).fract() * 100.0,
                size_px: 2.0 + (i % 3) as f64,
                delay_s: (i % 7) as f64 * 0.6,
                duration_s: 6.0 + (i % 5) as f64 * 1.5,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_scales_with_scroll() {
        assert_eq!(parallax_offset(0.0, 0.3), 0.0);
        assert_eq!(parallax_offset(100.0, 0.5), 50.0);
        // Rubber-band overscroll reports negative offsets on some browsers.
        assert_eq!(parallax_offset(-40.0, 0.3), 0.0);
    }

    #[test]
    fn glow_is_relative_to_the_box() {
        assert_eq!(glow_position(150.0, 250.0, 100.0, 200.0, 200.0, 100.0), (25.0, 50.0));
        assert_eq!(glow_position(0.0, 0.0, 100.0, 200.0, 200.0, 100.0), (0.0, 0.0));
        assert_eq!(glow_position(900.0, 900.0, 100.0, 200.0, 200.0, 100.0), (100.0, 100.0));
        assert_eq!(glow_position(10.0, 10.0, 0.0, 0.0, 0.0, 0.0), (50.0, 50.0));
    }

    #[test]
    fn particles_stay_inside_the_hero() {
        let field = particles(28);
        assert_eq!(field.len(), 28);
        for p in &field {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!(p.size_px >= 2.0 && p.size_px <= 4.0);
            assert!(p.duration_s >= 6.0);
        }
    }

    #[test]
    fn particle_layout_is_stable_and_spread() {
        assert_eq!(particles(10), particles(10));
        let field = particles(10);
        for (i, a) in field.iter().enumerate() {
            for b in &field[i + 1..] {
                let dx = a.left_pct - b.left_pct;
                let dy = a.top_pct - b.top_pct;
                assert!(dx.abs() > 1.0 || dy.abs() > 1.0);
            }
        }
    }

    #[test]
    fn particle_style_is_inline_css() {
        let style = particles(1)[0].style();
        assert!(style.starts_with("left: 61.80%; top: 75.49%;"));
        assert!(style.contains("width: 2px"));
    }
}
