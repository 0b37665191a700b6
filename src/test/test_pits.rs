mod test {
    use crate::core::Direction::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_player_walks_into_pit_both_are_gone() {
        let mut game = GameTestState::on_blank_ground("W>HW");
        game.assert_move(Right);
        game.assert_matches("W__W");
        assert!(!game.board.has_player());
    }

    #[test]
    fn when_player_walks_down_into_pit_it_is_consumed() {
        let level = r#"
W>W
WHW
"#;
        let mut game = GameTestState::on_blank_ground(level);
        game.assert_move(Down);
        game.assert_matches(
            r#"
W_W
W_W
"#,
        );
        assert!(!game.board.has_player());
    }

    #[test]
    fn when_box_pushed_into_pit_box_vanishes_and_pit_stays() {
        let mut game = GameTestState::on_blank_ground(">BH");
        game.assert_move(Right);
        game.assert_matches("_>H");
    }

    #[test]
    fn when_item_pushed_into_pit_item_vanishes_and_pit_stays() {
        let mut game = GameTestState::on_blank_ground("W>rHW");
        game.assert_move(Right);
        game.assert_matches("W_>HW");
    }

    #[test]
    fn when_pit_survives_a_box_it_still_destroys_the_player() {
        let mut game = GameTestState::on_blank_ground("W>BHW");
        game.assert_move(Right);
        game.assert_matches("W_>HW");
        game.assert_move(Right);
        game.assert_matches("W___W");
        assert!(!game.board.has_player());
    }

    #[test]
    fn when_player_is_destroyed_later_moves_are_no_ops() {
        let mut game = GameTestState::on_blank_ground("W>H_W");
        game.assert_move(Right);
        assert!(!game.board.has_player());
        game.assert_unchanged_by(Right);
        game.assert_unchanged_by(Left);
    }

    #[test]
    fn when_pit_sits_beside_the_path_walking_past_is_safe() {
        let level = r#"
WWWWW
W_H_W
W>__W
WWWWW
"#;
        let mut game = GameTestState::on_blank_ground(level);
        game.assert_moves(&[Right, Right]);
        game.assert_matches(
            r#"
WWWWW
W_H_W
W__>W
WWWWW
"#,
        );
        assert!(game.board.has_player());
    }
}
