use super::super::tables::step_excluded;
use super::super::{Board, MoveList, Piece};

impl Board {
    /// Walk each ray until the edge, a friendly piece, or a capture.
    pub(crate) fn slider_moves(&self, piece: &Piece, offsets: &[i8]) -> MoveList {
        let mut moves = MoveList::new();
        for &offset in offsets {
            let mut current = piece.square();
            // The file check runs before every step, so a ray stops at a/h.
            while !step_excluded(current, offset) {
                let Some(next) = current.offset(offset) else {
                    break;
                };
                match self.step_to(piece, next) {
                    Some(mv) => {
                        let is_capture = mv.is_attack();
                        moves.push(mv);
                        if is_capture {
                            break;
                        }
                    }
                    None => break,
                }
                current = next;
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use crate::board::tables::{BISHOP_OFFSETS, QUEEN_OFFSETS, ROOK_OFFSETS};
    use crate::board::{BoardBuilder, Color, PieceKind, Square};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn destinations(builder: BoardBuilder, from: &str, offsets: &[i8]) -> Vec<String> {
        let board = builder.build();
        let piece = board.cell(sq(from)).unwrap();
        let mut names: Vec<String> = board
            .slider_moves(&piece, offsets)
            .iter()
            .map(|m| m.destination().to_string())
            .collect();
        names.sort();
        names
    }

    fn kings_at(white: &str, black: &str) -> BoardBuilder {
        BoardBuilder::new()
            .piece(PieceKind::King, Color::White, sq(white))
            .piece(PieceKind::King, Color::Black, sq(black))
    }

    #[test]
    fn rook_in_corner_sees_both_lines() {
        let builder = kings_at("h3", "h6").piece(PieceKind::Rook, Color::White, sq("a1"));
        let mut expected: Vec<String> = [
            "a2", "a3", "a4", "a5", "a6", "a7", "a8", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        expected.sort();
        assert_eq!(destinations(builder, "a1", &ROOK_OFFSETS), expected);
    }

    #[test]
    fn rook_on_a_file_does_not_wrap_to_h_file() {
        let builder = kings_at("e1", "e8").piece(PieceKind::Rook, Color::White, sq("a4"));
        let dests = destinations(builder, "a4", &ROOK_OFFSETS);
        assert!(!dests.contains(&"h5".to_string()));
        assert!(dests.contains(&"h4".to_string()));
        assert_eq!(dests.len(), 14);
    }

    #[test]
    fn bishop_on_h_file_does_not_wrap() {
        let builder = kings_at("a1", "a8").piece(PieceKind::Bishop, Color::White, sq("h4"));
        let mut expected: Vec<String> = ["g5", "f6", "e7", "d8", "g3", "f2", "e1"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        expected.sort();
        assert_eq!(destinations(builder, "h4", &BISHOP_OFFSETS), expected);
    }

    #[test]
    fn queen_stops_at_friend_and_captures_enemy() {
        let builder = kings_at("h1", "h8")
            .piece(PieceKind::Queen, Color::White, sq("d4"))
            .piece(PieceKind::Pawn, Color::White, sq("d6"))
            .piece(PieceKind::Knight, Color::Black, sq("f4"));
        let dests = destinations(builder, "d4", &QUEEN_OFFSETS);
        assert!(dests.contains(&"d5".to_string()));
        assert!(!dests.contains(&"d6".to_string()));
        assert!(dests.contains(&"f4".to_string()));
        assert!(!dests.contains(&"g4".to_string()));
    }
}
