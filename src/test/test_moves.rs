mod test {
    use crate::core::Direction::*;
    use crate::core::Vec2;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_walking_right_player_advances() {
        let mut game = GameTestState::on_blank_ground("W>_W");
        game.assert_move(Right);
        game.assert_matches("W_>W");
    }

    #[test]
    fn when_walking_up_player_faces_up() {
        let level = r#"
W_W
W>W
"#;
        let mut game = GameTestState::on_blank_ground(level);
        game.assert_move(Up);
        game.assert_matches(
            r#"
W^W
W_W
"#,
        );
    }

    #[test]
    fn when_wall_ahead_board_is_unchanged() {
        let mut game = GameTestState::on_blank_ground("W>W");
        game.assert_unchanged_by(Right);
    }

    #[test]
    fn when_gap_then_wall_second_move_is_rejected() {
        let level = r#"
W>_W
W__W
"#;
        let mut game = GameTestState::on_blank_ground(level);
        game.assert_move(Right);
        game.assert_matches(
            r#"
W_>W
W__W
"#,
        );
        game.assert_unchanged_by(Right);
    }

    #[test]
    fn when_push_pushes_box() {
        let mut game = GameTestState::on_blank_ground("W>B_W");
        game.assert_move(Right);
        game.assert_matches("W_>BW");
    }

    #[test]
    fn when_push_pushes_item() {
        let mut game = GameTestState::on_blank_ground("W>r_W");
        game.assert_move(Right);
        game.assert_matches("W_>rW");
    }

    #[test]
    fn when_push_blocked_by_wall_nothing_moves() {
        let mut game = GameTestState::on_blank_ground("W>BW");
        game.assert_unchanged_by(Right);
    }

    #[test]
    fn when_box_pushed_into_box_remains_two_boxes() {
        let mut game = GameTestState::on_blank_ground("W>BB_W");
        game.try_move(Right);
        game.assert_matches("W>BB_W");
    }

    #[test]
    fn when_item_pushed_into_box_nothing_moves() {
        let mut game = GameTestState::on_blank_ground("W>rB_W");
        game.assert_unchanged_by(Right);
    }

    #[test]
    fn when_push_at_grid_edge_is_rejected() {
        let mut game = GameTestState::on_blank_ground(">B");
        game.assert_unchanged_by(Right);
    }

    #[test]
    fn when_walk_off_grid_is_rejected() {
        let mut game = GameTestState::on_blank_ground(">");
        game.assert_unchanged_by(Right);
    }

    #[test]
    fn when_no_player_move_is_a_no_op() {
        let game = GameTestState::on_blank_ground("W_BW");
        assert!(!game.board.has_player());
        assert_eq!(game.board.move_player(Right), game.board);
    }

    #[test]
    fn when_player_walks_back_only_orientation_differs() {
        let mut game = GameTestState::on_blank_ground("W>_BW");
        let original = game.board.clone();
        game.assert_move(Right);
        game.assert_move(Left);
        game.assert_matches("W<_BW");
        assert_ne!(original, game.board);
    }

    #[test]
    fn when_player_moves_location_is_recomputed() {
        let mut game = GameTestState::on_blank_ground("W>__W");
        assert_eq!(game.board.locate_player(), Some(Vec2 { i: 0, j: 1 }));
        game.assert_move(Right);
        assert_eq!(game.board.locate_player(), Some(Vec2 { i: 0, j: 2 }));
    }

    #[test]
    fn when_moving_through_open_room_every_direction_works() {
        let level = r#"
WWWW
W__W
W>_W
WWWW
"#;
        let mut game = GameTestState::on_blank_ground(level);
        game.assert_moves(&[Up, Right, Down, Left]);
        game.assert_matches(
            r#"
WWWW
W__W
W<_W
WWWW
"#,
        );
    }
}
