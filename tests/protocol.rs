mod tests {
    use glowlink::command::COMMAND_WIRE_SIZE;
    use glowlink::protocol::{
        ColorRequest, DecodeError, MacAddress, Message, PASSTHROUGH_WIRE_SIZE, PassthroughText,
        REQUEST_WIRE_SIZE,
    };
    use glowlink::{EffectKind, LightCommand};

    #[test]
    fn test_command_roundtrip() {
        let command = LightCommand {
            red: 255,
            green: 10,
            blue: 20,
            white: 30,
            warm_white: 40,
            brightness: 50,
            effect: EffectKind::Pulse,
            speed: 77,
        };
        let bytes = command.encode();
        assert_eq!(bytes.len(), COMMAND_WIRE_SIZE);
        assert_eq!(Message::decode(&bytes), Ok(Message::Command(command)));
    }

    #[test]
    fn test_unknown_effect_decodes_as_solid() {
        let mut bytes = LightCommand::default().encode();
        bytes[6] = 99;
        let Ok(Message::Command(command)) = Message::decode(&bytes) else {
            panic!("expected a command");
        };
        assert_eq!(command.effect, EffectKind::Solid);
    }

    #[test]
    fn test_effect_kind_raw_values() {
        assert_eq!(EffectKind::from_raw(0), EffectKind::Solid);
        assert_eq!(EffectKind::from_raw(1), EffectKind::Rainbow);
        assert_eq!(EffectKind::from_raw(2), EffectKind::Fade);
        assert_eq!(EffectKind::from_raw(3), EffectKind::Strobe);
        assert_eq!(EffectKind::from_raw(4), EffectKind::Pulse);
        assert_eq!(EffectKind::from_raw(5), EffectKind::Sparkle);
        assert_eq!(EffectKind::from_raw(6), EffectKind::Wave);
        assert_eq!(EffectKind::from_raw(7), EffectKind::Solid);
        assert_eq!(EffectKind::Wave.as_str(), "wave");
    }

    #[test]
    fn test_color_request_marker() {
        let request = ColorRequest::color();
        assert_eq!(request.encode(), [1, 1]);
        assert!(request.is_color_request());

        let other = ColorRequest {
            request_type: 2,
            from_receiver: 1,
        };
        assert!(!other.is_color_request());
    }

    #[test]
    fn test_request_decode() {
        assert_eq!(
            Message::decode(&[1, 1]),
            Ok(Message::Request(ColorRequest::color()))
        );
        assert_eq!(REQUEST_WIRE_SIZE, 2);
    }

    #[test]
    fn test_unknown_length_is_rejected() {
        assert_eq!(Message::decode(&[]), Err(DecodeError::UnknownLength(0)));
        assert_eq!(
            Message::decode(&[0; 7]),
            Err(DecodeError::UnknownLength(7))
        );
        assert_eq!(
            Message::decode(&[0; 9]),
            Err(DecodeError::UnknownLength(9))
        );
        assert_eq!(
            Message::decode(&[0; 250]),
            Err(DecodeError::UnknownLength(250))
        );
    }

    #[test]
    fn test_passthrough_roundtrip() {
        let text = PassthroughText::new(b"receiver booted");
        let bytes = text.encode();
        assert_eq!(bytes.len(), PASSTHROUGH_WIRE_SIZE);
        assert_eq!(Message::decode(&bytes), Ok(Message::Passthrough(text)));
    }

    #[test]
    fn test_passthrough_truncates_at_capacity() {
        let text = PassthroughText::new(&[b'x'; 100]);
        assert_eq!(text.as_bytes().len(), 32);
    }

    #[test]
    fn test_passthrough_bad_tag_and_length() {
        let mut bytes = PassthroughText::new(b"ok").encode();
        bytes[0] = 0xFF;
        assert_eq!(Message::decode(&bytes), Err(DecodeError::UnknownTag(0xFF)));

        let mut bytes = PassthroughText::new(b"ok").encode();
        bytes[1] = 33;
        assert_eq!(
            Message::decode(&bytes),
            Err(DecodeError::LengthOutOfBounds(33))
        );
    }

    #[test]
    fn test_mac_address_display() {
        let mac = MacAddress([0x6C, 0xC8, 0x40, 0x88, 0x58, 0xA0]);
        assert_eq!(format!("{mac}"), "6C:C8:40:88:58:A0");
    }
}
