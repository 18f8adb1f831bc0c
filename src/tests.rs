#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use crate::builder::KeypadBuilder;
    use crate::keypad::{decode, Keypad, KeypadError, KeypadNavigator};
    use crate::location::{Location, Position};
    use crate::room::{find_sector, sum_real_sector_ids, Room, RoomError};
    use crate::shape::SquareStep;
    use crate::triangle::{count_possible_by_columns, count_possible_by_rows, Triangle, TriangleError};
    use crate::walk::{Walker, WalkError};

    const SAMPLE_INSTRUCTIONS: &str = "ULL\nRRDDD\nLURDL\nUUUUD";

    fn square_code(input: &str) -> String {
        decode(Keypad::square(), input).unwrap()
    }

    fn diamond_code(input: &str) -> String {
        decode(Keypad::diamond(), input).unwrap()
    }

    #[test]
    fn square_keypad_short_inputs() {
        assert_eq!(square_code("U"), "2");
        // second U is blocked by the top edge
        assert_eq!(square_code("U\nU"), "22");
        assert_eq!(square_code("U\nR"), "23");
    }

    #[test]
    fn square_keypad_sample() {
        assert_eq!(square_code(SAMPLE_INSTRUCTIONS), "1985");
        assert_eq!(square_code("ULL\n\nRRDDD\r\nLURDL\nUUUUD\n"), "1985");
    }

    #[test]
    fn diamond_keypad_short_inputs() {
        assert_eq!(diamond_code("U"), "5");
        assert_eq!(diamond_code("U\nU"), "55");
        assert_eq!(diamond_code("U\nR"), "56");
    }

    #[test]
    fn diamond_keypad_sample() {
        assert_eq!(diamond_code(SAMPLE_INSTRUCTIONS), "5DB3");
    }

    #[test]
    fn diamond_layout() {
        assert_eq!(format!("{}", Keypad::diamond()), "..1..
.234.
56789
.ABC.
..D..
");
        assert_eq!(Keypad::diamond().find('5'), Some(Location(0, 2)));
        assert_eq!(Keypad::diamond().get(Location(0, 0)), None);
        assert_eq!(Keypad::diamond().get(Location(2, 4)), Some('D'));
        assert_eq!(Keypad::diamond().get(Location(5, 2)), None);
    }

    #[test]
    fn spaces_are_gaps() {
        let keypad = Keypad::parse(" 1 \n234");
        assert_eq!(format!("{}", keypad), ".1.
234
");
        assert_eq!(keypad.get(Location(0, 0)), None);
        assert_eq!(keypad.find('1'), Some(Location(1, 0)));

        let mut navigator = KeypadNavigator::new(keypad, '2').unwrap();
        navigator.process("U\nRU").unwrap();
        assert_eq!(navigator.code(), "21");
    }

    #[test]
    fn missing_start_label() {
        assert_eq!(KeypadNavigator::new(Keypad::square(), 'A').unwrap_err(), KeypadError::InvalidGrid('A'));
        assert_eq!(KeypadNavigator::new(Keypad::new(vec![]), '5').unwrap_err(), KeypadError::InvalidGrid('5'));
    }

    #[test]
    fn unknown_command_aborts_whole_call() {
        let mut navigator = KeypadNavigator::new(Keypad::square(), '5').unwrap();
        navigator.process("U").unwrap();

        assert_eq!(navigator.process("R\nLX\nD"), Err(KeypadError::UnknownCommand('X')));
        assert_eq!(navigator.code(), "2");
        assert_eq!(navigator.position(), Location(1, 0));

        assert_eq!(navigator.move_once('u'), Err(KeypadError::UnknownCommand('u')));
        assert_eq!(navigator.position(), Location(1, 0));
    }

    #[test]
    fn interior_moves_sum_as_vectors() {
        let keypad = Keypad::parse("12345\n67890\nabcde\nfghij\nklmno");
        let mut navigator = KeypadNavigator::new(keypad, 'c').unwrap();
        let start = navigator.position();

        for command in ['U', 'L', 'D', 'D', 'R', 'R', 'U'] {
            navigator.move_once(command).unwrap();
        }

        assert_eq!(navigator.position(), start.offset_by((1, 0)).unwrap());
        assert_eq!(navigator.current(), 'd');
    }

    #[test]
    fn up_then_down_is_identity() {
        let mut navigator = KeypadNavigator::new(Keypad::square(), '5').unwrap();
        let start = navigator.position();

        navigator.move_once('U').unwrap();
        navigator.move_once('D').unwrap();
        assert_eq!(navigator.position(), start);

        for step in SquareStep::VARIANTS {
            assert!(navigator.step(*step));
            assert!(navigator.step(step.invert()));
            assert_eq!(navigator.position(), start);
        }
    }

    #[test]
    fn blocked_moves_are_idempotent() {
        let mut navigator = KeypadNavigator::new(Keypad::diamond(), '5').unwrap();
        let start = navigator.position();

        // off the left edge, then into the gaps above and below
        for command in ['L', 'U', 'D'] {
            for _ in 0..5 {
                navigator.move_once(command).unwrap();
                assert_eq!(navigator.position(), start);
            }
        }

        navigator.process("RRRRRRR\nUUU").unwrap();
        assert_eq!(navigator.code(), "99");
    }

    #[test]
    fn jagged_rows_checked_at_destination() {
        let keypad = Keypad::new(vec![
            vec![Some('1'), Some('2'), Some('3')],
            vec![Some('4')],
            vec![Some('7'), Some('8')],
        ]);
        let mut navigator = KeypadNavigator::new(keypad, '3').unwrap();

        // row 1 holds only '4', so moving down from '3' or '2' and up from '8' is blocked
        navigator.process("D\nL\nLDD\nRU").unwrap();
        assert_eq!(navigator.code(), "3278");
    }

    #[test]
    fn code_has_one_character_per_line() {
        let mut navigator = KeypadNavigator::new(Keypad::square(), '5').unwrap();
        navigator.process("U\n\nLL\nR\n\n\nD\n").unwrap();

        assert_eq!(navigator.code().chars().count(), 4);
        assert_eq!(navigator.code(), "2125");
    }

    #[test]
    fn builder() {
        let navigator = KeypadBuilder::default()
            .row([None, None, Some('1'), None, None])
            .row([None, Some('2'), Some('3'), Some('4'), None])
            .buttons("56789")
            .row([None, Some('A'), Some('B'), Some('C'), None])
            .row([None, None, Some('D'), None, None])
            .build()
            .unwrap();

        assert_eq!(navigator.keypad(), &Keypad::diamond());
        assert_eq!(navigator.current(), '5');

        let mut navigator = KeypadBuilder::from_keypad(&Keypad::square())
            .start('9')
            .build()
            .unwrap();
        navigator.process("UL").unwrap();
        assert_eq!(navigator.code(), "5");
    }

    #[test]
    fn builder_errors() {
        assert_eq!(KeypadBuilder::default().build().unwrap_err(), KeypadError::EmptyGrid);
        assert_eq!(
            KeypadBuilder::default().buttons("123").pop_row().build().unwrap_err(),
            KeypadError::EmptyGrid
        );
        assert_eq!(
            KeypadBuilder::default().buttons("1234").build().unwrap_err(),
            KeypadError::InvalidGrid('5')
        );
    }

    #[test]
    fn turning() {
        let mut walker = Walker::new();
        let mut left = vec![];
        let mut right = vec![];

        for _ in 0..4 {
            walker.turn_left();
            left.push(walker.heading());
        }
        for _ in 0..4 {
            walker.turn_right();
            right.push(walker.heading());
        }

        assert_eq!(left, vec![SquareStep::Left, SquareStep::Down, SquareStep::Right, SquareStep::Up]);
        assert_eq!(right, vec![SquareStep::Right, SquareStep::Down, SquareStep::Left, SquareStep::Up]);
    }

    #[test]
    fn walk_distances() {
        for (input, expected) in [
            ("R1", 1),
            ("R1, R1, R1, R1", 0),
            ("L1, L1, L1, L1", 0),
            ("R2", 2),
            ("L4", 4),
            ("R2, L3", 5),
            ("R2, R2, R2", 2),
            ("R5, L5, R5, R3", 12),
            ("R5, L5, R5, R3\n", 12),
            ("L192, R45", 237),
        ] {
            assert_eq!(Walker::new().follow(input), Ok(expected), "{}", input);
        }
    }

    #[test]
    fn walk_position() {
        let mut walker = Walker::new();
        walker.follow("R2, L3").unwrap();
        assert_eq!(walker.position(), Position(2, -3));
        assert_eq!(walker.heading(), SquareStep::Up);
    }

    #[test]
    fn first_revisit() {
        let mut walker = Walker::new();
        walker.follow("R8, R4, R4, R8").unwrap();
        assert_eq!(walker.first_revisit(), Some(4));

        let mut walker = Walker::new();
        walker.follow("R2, L3").unwrap();
        assert_eq!(walker.first_revisit(), None);

        // the starting point is not recorded, so returning to it is a first visit
        let mut walker = Walker::new();
        walker.follow("R1, R1, R1, R1").unwrap();
        assert_eq!(walker.first_revisit(), None);
        walker.follow("R1").unwrap();
        assert_eq!(walker.first_revisit(), Some(1));
    }

    #[test]
    fn walk_errors() {
        assert_eq!(Walker::new().follow("R2, X3"), Err(WalkError::UnknownTurn("X3".to_owned())));
        assert!(matches!(Walker::new().follow("R2, L"), Err(WalkError::BadDistance { .. })));
        assert!(matches!(Walker::new().follow("R-2"), Err(WalkError::BadDistance { .. })));

        // nothing moves when parsing fails
        let mut walker = Walker::new();
        assert!(walker.follow("R2, Q").is_err());
        assert_eq!(walker.position(), Position(0, 0));
    }

    #[test]
    fn triangles() {
        for valid in ["3 4 5", "5 4 3", "3 5 4", "6 8 10", " 6 8 10", " 8  6  10"] {
            assert!(valid.parse::<Triangle>().unwrap().is_possible(), "{}", valid);
        }
        for invalid in ["3 4 50", "5 4 30", "6 8 100", "  8   6  100 ", "5 10 25", "1 2 3"] {
            assert!(!invalid.parse::<Triangle>().unwrap().is_possible(), "{}", invalid);
        }

        assert!(Triangle(u32::MAX, u32::MAX, u32::MAX).is_possible());
    }

    #[test]
    fn triangle_parse_errors() {
        assert_eq!("3 4".parse::<Triangle>(), Err(TriangleError::SideCount { found: 2 }));
        assert_eq!("3 4 5 6".parse::<Triangle>(), Err(TriangleError::SideCount { found: 4 }));
        assert!(matches!("3 x 5".parse::<Triangle>(), Err(TriangleError::BadSide(_))));
    }

    #[test]
    fn triangles_by_rows() {
        assert_eq!(count_possible_by_rows("3 4 5\n5 4 3\n10 1 1\n10 1 2"), Ok(2));
        assert_eq!(count_possible_by_rows("    3  4  5 \n      5 4  3"), Ok(2));
        assert_eq!(count_possible_by_rows(" 3 4  50 \n 50 4  3\n"), Ok(0));
    }

    #[test]
    fn triangles_by_columns() {
        assert_eq!(count_possible_by_columns("3  4  5\n4  5  3\n5  3  4"), Ok(3));
        assert_eq!(count_possible_by_columns("101 301 501
102 302 502
103 303 503
201 401 601
202 402 602
203 403 603
"), Ok(6));
        assert_eq!(count_possible_by_columns("3 4 5\n10 1 1\n5 4 3\n"), Ok(1));
        assert_eq!(count_possible_by_columns("3 4 5\n4 5 3"), Err(TriangleError::IncompleteGroup { rows: 2 }));
    }

    #[test]
    fn room_checksums() {
        for real in ["aaaaa-bbb-z-y-x-123[abxyz]", "a-b-c-d-e-f-g-h-987[abcde]", "not-a-real-room-404[oarel]"] {
            assert!(real.parse::<Room>().unwrap().is_real(), "{}", real);
        }

        let decoy: Room = "totally-real-room-200[decoy]".parse().unwrap();
        assert!(!decoy.is_real());
        assert_eq!(decoy.expected_checksum(), "loart");
    }

    #[test]
    fn room_parts() {
        let room: Room = "aaaaa-bbb-z-y-x-123[abxyz]".parse().unwrap();
        assert_eq!(room, Room {
            name: "aaaaa-bbb-z-y-x".to_owned(),
            sector_id: 123,
            checksum: "abxyz".to_owned(),
        });
    }

    #[test]
    fn room_parse_errors() {
        for malformed in [
            "",
            "abc[defgh]",
            "abc-123",
            "-123[abcde]",
            "Abc-123[abcde]",
            "abc-123[ABCDE]",
            "abc-1[]",
            "abc-+5[abc]",
            "abc-12x[abcde]",
            "abc-[abcde]",
        ] {
            assert!(matches!(malformed.parse::<Room>(), Err(RoomError::Malformed(_))), "{}", malformed);
        }
        assert!(matches!("abc-99999999999[abcde]".parse::<Room>(), Err(RoomError::BadSector(_))));
    }

    #[test]
    fn decryption() {
        let room: Room = "qzmt-zixmtkozy-ivhz-343[ignored]".parse().unwrap();
        assert_eq!(room.rotate_by(0), "qzmt zixmtkozy ivhz");
        assert_eq!(room.rotate_by(343), "very encrypted name");
        assert_eq!(room.decrypt(), "very encrypted name");
    }

    #[test]
    fn rotation_leaves_other_characters() {
        let room = Room {
            name: "Abc-\u{e9}-z".to_owned(),
            sector_id: 1,
            checksum: String::new(),
        };
        assert_eq!(room.decrypt(), "Acd \u{e9} a");
    }

    #[test]
    fn room_directory() {
        let input = "aaaaa-bbb-z-y-x-123[abxyz]
a-b-c-d-e-f-g-h-987[abcde]
not-a-real-room-404[oarel]
totally-real-room-200[decoy]
qzmt-zixmtkozy-ivhz-343[zimth]
";
        assert_eq!(sum_real_sector_ids(&input.lines().take(4).collect::<Vec<_>>().join("\n")), Ok(1514));
        assert_eq!(find_sector(input, "very encrypted name"), Ok(Some(343)));
        assert_eq!(find_sector(input, "northpole object storage"), Ok(None));
        assert!(sum_real_sector_ids("oops\n").is_err());
    }
}
