mod support;

mod tests {
    use hsi_lightbulb::{
        AttributeError, AttributeKind, AttributeValue, Attributes, Channel, Level, LightOutput,
        LightState, Rgb, ValueFormat,
    };

    use crate::support::{ALL_DARK, Call, RecordingDriver};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn light() -> LightState<RecordingDriver> {
        LightState::new(RecordingDriver::new())
    }

    /// Powered-off light with the given color, driver log cleared
    fn light_with(hue: f32, saturation: f32, brightness: f32) -> LightState<RecordingDriver> {
        let mut light = light();
        light.set_hue(hue);
        light.set_saturation(saturation);
        light.set_brightness(brightness);
        light.driver_mut().take();
        light
    }

    #[test]
    fn test_defaults() {
        let light = light();
        assert!(!light.power());
        assert_eq!(light.hue(), 0.0);
        assert_eq!(light.saturation(), 0.0);
        assert_eq!(light.brightness(), 0.0);
        assert!(light.driver().calls.is_empty());
    }

    #[test]
    fn test_writes_while_off_stay_dark() {
        let mut light = light();
        assert_eq!(light.set_hue(200.0), LightOutput::Dark);
        assert_eq!(light.set_brightness(100.0), LightOutput::Dark);
        let calls = light.driver_mut().take();
        assert_eq!(calls.len(), 6);
        assert!(calls.chunks(3).all(|chunk| chunk == ALL_DARK));
    }

    #[test]
    fn test_power_off_is_dark() {
        let mut light = light_with(120.0, 100.0, 100.0);
        light.set_power(true);
        light.driver_mut().take();

        assert_eq!(light.set_power(false), LightOutput::Dark);
        assert!(!light.power());
        assert_eq!(light.driver_mut().take(), ALL_DARK);
        // Stored color survives
        assert_eq!(light.hue(), 120.0);
        assert_eq!(light.brightness(), 100.0);
    }

    #[test]
    fn test_power_on_below_brightness_floor() {
        let mut light = light_with(0.0, 100.0, 0.9);
        assert_eq!(light.set_power(true), LightOutput::Dark);
        assert!(light.power());
        assert_eq!(light.driver_mut().take(), ALL_DARK);
    }

    #[test]
    fn test_pure_red() {
        let mut light = light_with(0.0, 100.0, 100.0);
        let output = light.set_power(true);
        let LightOutput::Color(color) = output else {
            panic!("expected color, got {output:?}");
        };
        assert!(color.r >= 254);

        let calls = light.driver_mut().take();
        assert_eq!(calls.len(), 3);
        match calls[0] {
            Call::Analog(Channel::Red, duty) => assert!(duty <= 1, "duty {duty}"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(calls[1], Call::Digital(Channel::Green, Level::High));
        assert_eq!(calls[2], Call::Digital(Channel::Blue, Level::High));
    }

    #[test]
    fn test_pure_green() {
        let mut light = light_with(120.0, 100.0, 100.0);
        light.set_power(true);

        let calls = light.driver_mut().take();
        assert_eq!(calls[0], Call::Digital(Channel::Red, Level::High));
        match calls[1] {
            Call::Analog(Channel::Green, duty) => assert!(duty <= 1, "duty {duty}"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(calls[2], Call::Digital(Channel::Blue, Level::High));
    }

    #[test]
    fn test_grey_duty_is_inverted() {
        let mut light = light_with(77.0, 0.0, 100.0);
        assert_eq!(
            light.set_power(true),
            LightOutput::Color(Rgb {
                r: 85,
                g: 85,
                b: 85
            })
        );
        assert_eq!(
            light.driver_mut().take(),
            [
                Call::Analog(Channel::Red, 170),
                Call::Analog(Channel::Green, 170),
                Call::Analog(Channel::Blue, 170),
            ]
        );
    }

    #[test]
    fn test_dim_brightness_keeps_power() {
        let mut light = light_with(0.0, 100.0, 0.0);
        light.set_power(true);
        light.driver_mut().take();

        let output = light.set_brightness(0.5);
        assert_eq!(output, LightOutput::Color(BLACK));
        assert_eq!(output.rgb(), BLACK);
        assert!(light.power());
        assert_eq!(light.driver_mut().take(), ALL_DARK);
    }

    #[test]
    fn test_brightness_after_dark_power_on() {
        let mut light = light_with(0.0, 100.0, 0.0);
        assert_eq!(light.set_power(true), LightOutput::Dark);

        let output = light.set_brightness(100.0);
        assert!(output.rgb().r >= 254);
        assert_eq!((output.rgb().g, output.rgb().b), (0, 0));
    }

    #[test]
    fn test_values_are_stored_unclamped() {
        let mut light = light();
        light.set_brightness(150.0);
        light.set_hue(-30.0);
        light.set_saturation(-5.0);
        assert_eq!(light.brightness(), 150.0);
        assert_eq!(light.hue(), -30.0);
        assert_eq!(light.saturation(), -5.0);

        // Clamped only while converting
        light.set_power(true);
        assert_eq!(
            light.set_brightness(150.0),
            light.set_brightness(100.0)
        );
    }

    #[test]
    fn test_attribute_read() {
        let mut light = light();
        light.set_brightness(42.7);
        light.set_hue(210.5);
        light.set_saturation(33.0);

        assert_eq!(light.read(AttributeKind::On), Ok(AttributeValue::Bool(false)));
        assert_eq!(light.read(AttributeKind::Brightness), Ok(AttributeValue::Int(42)));
        assert_eq!(light.read(AttributeKind::Hue), Ok(AttributeValue::Float(210.5)));
        assert_eq!(
            light.read(AttributeKind::Saturation),
            Ok(AttributeValue::Float(33.0))
        );
        assert_eq!(
            light.read(AttributeKind::Model),
            Err(AttributeError::Unsupported(AttributeKind::Model))
        );
    }

    #[test]
    fn test_attribute_write() {
        let mut light = light();
        light.write(AttributeKind::Hue, AttributeValue::Float(0.0)).unwrap();
        light
            .write(AttributeKind::Saturation, AttributeValue::Float(100.0))
            .unwrap();
        light
            .write(AttributeKind::Brightness, AttributeValue::Int(100))
            .unwrap();
        let output = light
            .write(AttributeKind::On, AttributeValue::Bool(true))
            .unwrap();

        assert!(light.power());
        assert_eq!(light.brightness(), 100.0);
        assert!(output.rgb().r >= 254);
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let mut light = light_with(10.0, 20.0, 30.0);

        assert_eq!(
            light.write(AttributeKind::Brightness, AttributeValue::Str("not a number")),
            Err(AttributeError::TypeMismatch {
                kind: AttributeKind::Brightness,
                expected: ValueFormat::Int,
                found: ValueFormat::Str,
            })
        );
        assert!(
            light
                .write(AttributeKind::Brightness, AttributeValue::Float(80.0))
                .is_err()
        );
        assert!(light.write(AttributeKind::On, AttributeValue::Int(1)).is_err());
        assert!(
            light
                .write(AttributeKind::Hue, AttributeValue::Int(90))
                .is_err()
        );

        assert_eq!(light.brightness(), 30.0);
        assert_eq!(light.hue(), 10.0);
        assert!(!light.power());
        assert!(light.driver().calls.is_empty());
    }
}
