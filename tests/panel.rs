mod tests {
    use myrtio_vu_meter::color::{BLACK, RED, Rgbw, rgbw};
    use myrtio_vu_meter::{
        AudioSignal, AudioTriggerData, EffectError, MatrixPanel, OutputDriver, Panel,
    };

    #[derive(Default)]
    struct LastFrame {
        pixels: Vec<Rgbw>,
    }

    impl OutputDriver for LastFrame {
        fn write(&mut self, colors: &[Rgbw]) {
            self.pixels = colors.to_vec();
        }
    }

    #[test]
    fn test_panel_capacity() {
        assert!(MatrixPanel::<LastFrame, 12>::new(LastFrame::default(), 4, 3).is_ok());
        assert!(matches!(
            MatrixPanel::<LastFrame, 12>::new(LastFrame::default(), 5, 3),
            Err(EffectError::OutOfMemory {
                requested: 15,
                capacity: 12
            })
        ));
        assert!(MatrixPanel::<LastFrame, 12>::new(LastFrame::default(), usize::MAX, 2).is_err());
    }

    #[test]
    fn test_plot_and_show() {
        let mut panel = MatrixPanel::<LastFrame, 16>::new(LastFrame::default(), 3, 2).unwrap();
        let blue = rgbw(0, 0, 255, 0);

        panel.plot_all(blue);
        panel.plot_pixel(2, 1, RED);
        panel.plot_pixel(3, 0, RED);
        panel.plot_pixel(0, 2, RED);
        panel.show();

        assert_eq!(panel.pixel(2, 1), Some(RED));
        assert_eq!(panel.pixel(3, 0), None);
        assert_eq!(panel.row(0).unwrap(), &[blue, blue, blue]);
        assert_eq!(panel.row(2), None);
        assert_eq!(panel.driver().pixels, vec![blue, blue, blue, blue, blue, RED]);
        assert_eq!(panel.frames_shown(), 1);

        panel.clear();
        assert!(panel.pixels().iter().all(|&c| c == BLACK));
        assert_eq!(panel.driver().pixels.len(), 6);
    }

    #[test]
    fn test_panel_settings() {
        let mut panel = MatrixPanel::<LastFrame, 4>::new(LastFrame::default(), 2, 2).unwrap();
        panel.set_timeout(40);
        panel.set_dim_all(true);
        panel.set_pix_pos(5);
        assert_eq!(panel.timeout(), 40);
        assert!(panel.dim_all());
        assert_eq!(panel.pix_pos(), 5);
    }

    #[test]
    fn test_audio_signal() {
        let signal = AudioSignal::default();
        assert_eq!(signal.snapshot(), AudioTriggerData::new());

        let data = AudioTriggerData {
            is_noisy: true,
            level: 0.7,
            old_level: 0.6,
            norm_level: 0.5,
            last_level: 1.4,
        };
        signal.publish(data);
        assert_eq!(signal.snapshot(), data);

        signal.update(|data| data.level = 0.1);
        assert_eq!(signal.snapshot().level, 0.1);
        assert_eq!(signal.snapshot().old_level, 0.6);
    }
}
