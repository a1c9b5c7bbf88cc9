use super::super::tables::step_excluded;
use super::super::{Board, Move, MoveKind, MoveList, Piece, Square, PROMOTION_KIND};

const PUSH: i8 = 8;
const JUMP: i8 = 16;
const DIAGONALS: [i8; 2] = [7, 9];

/// Forward diagonal tiles a pawn covers, whatever stands on them.
pub(super) fn attack_targets(pawn: &Piece) -> Vec<Square> {
    let direction = pawn.color().direction();
    DIAGONALS
        .iter()
        .map(|&diagonal| diagonal * direction)
        .filter(|&offset| !step_excluded(pawn.square(), offset))
        .filter_map(|offset| pawn.square().offset(offset))
        .collect()
}

impl Board {
    pub(crate) fn pawn_moves(&self, pawn: &Piece) -> MoveList {
        let mut moves = MoveList::new();
        let color = pawn.color();
        let direction = color.direction();
        let from = pawn.square();

        if let Some(ahead) = from.offset(PUSH * direction) {
            if !self.is_occupied(ahead) {
                moves.push(promote_on_last_rank(Move::new(
                    MoveKind::PawnMove,
                    *pawn,
                    ahead,
                )));

                if pawn.is_first_move() && color.is_pawn_start_rank(from) {
                    if let Some(jump) = from.offset(JUMP * direction) {
                        if !self.is_occupied(jump) {
                            moves.push(Move::new(MoveKind::PawnJump, *pawn, jump));
                        }
                    }
                }
            }
        }

        for diagonal in DIAGONALS {
            let offset = diagonal * direction;
            if step_excluded(from, offset) {
                continue;
            }
            let Some(target) = from.offset(offset) else {
                continue;
            };
            match self.cell(target) {
                Some(occupant) if occupant.color() != color => {
                    moves.push(promote_on_last_rank(Move::new(
                        MoveKind::PawnAttack {
                            captured: occupant,
                        },
                        *pawn,
                        target,
                    )));
                }
                Some(_) => {}
                None => {
                    if let Some(mv) = self.en_passant_capture(pawn, target, offset) {
                        moves.push(mv);
                    }
                }
            }
        }

        moves
    }

    /// Capture onto the empty `target` of the en passant pawn standing beside us.
    fn en_passant_capture(&self, pawn: &Piece, target: Square, offset: i8) -> Option<Move> {
        let victim = self.en_passant_pawn?;
        if victim.color() == pawn.color() {
            return None;
        }
        let beside = pawn
            .square()
            .offset(offset - PUSH * pawn.color().direction())?;
        (victim.square() == beside).then(|| {
            Move::new(
                MoveKind::EnPassant { captured: victim },
                *pawn,
                target,
            )
        })
    }
}

fn promote_on_last_rank(mv: Move) -> Move {
    if mv.piece().color().is_promotion_rank(mv.destination()) {
        mv.promote(PROMOTION_KIND)
    } else {
        mv
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardBuilder, Color, Piece, PieceKind, Square};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn kings() -> BoardBuilder {
        BoardBuilder::new()
            .piece(PieceKind::King, Color::White, sq("e1"))
            .piece(PieceKind::King, Color::Black, sq("e8"))
    }

    fn dests(board: &Board, from: &str) -> Vec<String> {
        let pawn = board.cell(sq(from)).unwrap();
        let mut names: Vec<String> = board
            .pawn_moves(&pawn)
            .iter()
            .map(|m| m.destination().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn starting_pawn_pushes_one_or_two() {
        let board = Board::standard();
        assert_eq!(dests(&board, "e2"), vec!["e3", "e4"]);
        assert_eq!(dests(&board, "d7"), vec!["d5", "d6"]);
    }

    #[test]
    fn jump_needs_both_tiles_empty() {
        let board = kings()
            .piece(PieceKind::Pawn, Color::White, sq("c2"))
            .piece(PieceKind::Knight, Color::Black, sq("c4"))
            .build();
        assert_eq!(dests(&board, "c2"), vec!["c3"]);

        let blocked = kings()
            .piece(PieceKind::Pawn, Color::White, sq("c2"))
            .piece(PieceKind::Knight, Color::Black, sq("c3"))
            .build();
        assert!(dests(&blocked, "c2").is_empty());
    }

    #[test]
    fn moved_pawn_cannot_jump() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, sq("b2")).with_first_move(false);
        let board = kings().place(pawn).build();
        assert_eq!(dests(&board, "b2"), vec!["b3"]);
    }

    #[test]
    fn captures_only_enemies_on_diagonals() {
        let board = kings()
            .piece(PieceKind::Pawn, Color::White, sq("d4"))
            .piece(PieceKind::Pawn, Color::Black, sq("c5"))
            .piece(PieceKind::Pawn, Color::White, sq("e5"))
            .build();
        assert_eq!(dests(&board, "d4"), vec!["c5", "d5"]);
    }

    #[test]
    fn edge_pawn_does_not_wrap() {
        let board = kings()
            .piece(PieceKind::Pawn, Color::White, sq("a4"))
            .piece(PieceKind::Rook, Color::Black, sq("h4"))
            .piece(PieceKind::Rook, Color::Black, sq("h6"))
            .build();
        assert_eq!(dests(&board, "a4"), vec!["a5"]);

        let black = kings()
            .piece(PieceKind::Pawn, Color::Black, sq("h5"))
            .piece(PieceKind::Rook, Color::White, sq("a5"))
            .piece(PieceKind::Rook, Color::White, sq("a3"))
            .build();
        assert_eq!(dests(&black, "h5"), vec!["h4"]);
    }

    #[test]
    fn en_passant_target_beside_pawn() {
        let victim = Piece::new(PieceKind::Pawn, Color::Black, sq("d5")).with_first_move(false);
        let board = kings()
            .piece(PieceKind::Pawn, Color::White, sq("e5"))
            .place(victim)
            .en_passant(victim)
            .build();
        let pawn = board.cell(sq("e5")).unwrap();
        let moves = board.pawn_moves(&pawn);
        let ep = moves.iter().find(|m| m.is_en_passant()).unwrap();
        assert_eq!(ep.destination(), sq("d6"));
        assert_eq!(ep.captured_piece(), Some(victim));
        assert_eq!(ep.to_string(), "exd6");
    }

    #[test]
    fn own_en_passant_pawn_is_not_capturable() {
        let own = Piece::new(PieceKind::Pawn, Color::White, sq("d4")).with_first_move(false);
        let board = kings()
            .piece(PieceKind::Pawn, Color::White, sq("e4"))
            .place(own)
            .en_passant(own)
            .side_to_move(Color::Black)
            .build();
        let pawn = board.cell(sq("e4")).unwrap();
        assert!(!board.pawn_moves(&pawn).iter().any(|m| m.is_en_passant()));
    }

    #[test]
    fn far_rank_moves_are_promotions() {
        let board = kings()
            .piece(PieceKind::Pawn, Color::White, sq("b7"))
            .piece(PieceKind::Rook, Color::Black, sq("a8"))
            .build();
        let pawn = board.cell(sq("b7")).unwrap();
        let moves = board.pawn_moves(&pawn);
        assert_eq!(moves.len(), 2);
        assert!(moves
            .iter()
            .all(|m| m.promotion() == Some(PieceKind::Queen)));
        assert!(moves.iter().any(|m| m.is_attack()));
    }
}
