mod tests {
    use myrtio_vu_meter::color::{
        BLACK, GREEN, RED, RandomColor, RandomWalk, Rgbw, interpolate, rgbw, rgbw_from_u32,
        to_rgb,
    };
    use myrtio_vu_meter::Rgb;

    const WHITE: Rgbw = rgbw(255, 255, 255, 255);
    const TEAL: Rgbw = rgbw(0, 128, 128, 10);

    #[test]
    fn test_interpolate_endpoints() {
        assert_eq!(interpolate(0.0, GREEN, RED), RED);
        assert_eq!(interpolate(1.0, GREEN, RED), GREEN);
        assert_eq!(interpolate(0.0, WHITE, TEAL), TEAL);
        assert_eq!(interpolate(1.0, WHITE, TEAL), WHITE);
    }

    #[test]
    fn test_interpolate_midpoint_truncates() {
        assert_eq!(interpolate(0.5, GREEN, RED), rgbw(127, 127, 0, 0));
        assert_eq!(interpolate(0.5, WHITE, BLACK), rgbw(127, 127, 127, 127));
        assert_eq!(interpolate(0.25, rgbw(100, 0, 0, 0), BLACK), rgbw(25, 0, 0, 0));
    }

    #[test]
    fn test_interpolate_saturates_out_of_range() {
        assert_eq!(interpolate(-0.5, GREEN, RED), rgbw(255, 0, 0, 0));
        assert_eq!(interpolate(1.5, GREEN, RED), rgbw(0, 255, 0, 0));
        assert_eq!(interpolate(-1.0, TEAL, WHITE), WHITE);
        assert_eq!(interpolate(3.0, TEAL, WHITE), rgbw(0, 0, 0, 0));
    }

    #[test]
    fn test_interpolate_stays_in_range() {
        let colors = [BLACK, WHITE, RED, GREEN, TEAL, rgbw(3, 250, 77, 128)];
        for step in 0..=20 {
            let percent = f64::from(step) / 20.0;
            for start in colors {
                for end in colors {
                    let result = interpolate(percent, start, end);
                    for (value, a, b) in [
                        (result.r, start.r, end.r),
                        (result.g, start.g, end.g),
                        (result.b, start.b, end.b),
                        (result.a.0, start.a.0, end.a.0),
                    ] {
                        assert!(value >= a.min(b) && value <= a.max(b));
                    }
                }
            }
        }
    }

    #[test]
    fn test_random_walk_is_deterministic() {
        let mut a = RandomWalk::new(42);
        let mut b = RandomWalk::new(42);
        for _ in 0..32 {
            assert_eq!(a.next_color(TEAL, 1, 1.0), b.next_color(TEAL, 1, 1.0));
        }
    }

    #[test]
    fn test_random_walk_moves_and_keeps_white() {
        let mut rng = RandomWalk::new(7);
        let mut color = rgbw(0, 0, 90, 33);
        let mut moved = false;
        for _ in 0..64 {
            let next = rng.next_color(color, 1, 1.0);
            assert_eq!(next.a.0, 33);
            moved |= next != color;
            color = next;
        }
        assert!(moved);
    }

    #[test]
    fn test_random_walk_zero_factor_is_identity() {
        let mut rng = RandomWalk::default();
        assert_eq!(rng.next_color(TEAL, 5, 0.0), TEAL);
        assert_eq!(rng.next_color(TEAL, 0, 1.0), TEAL);
    }

    #[test]
    fn test_rgbw_helpers() {
        assert_eq!(rgbw_from_u32(0x0000_5A00), rgbw(0, 0, 90, 0));
        assert_eq!(to_rgb(TEAL), Rgb { r: 0, g: 128, b: 128 });
    }
}
