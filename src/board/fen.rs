use super::{Board, Color, Square, TILES_PER_RANK};

impl Board {
    /// Serialize the position to FEN.
    ///
    /// Move counters are not tracked, so the last two fields are always `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(TILES_PER_RANK);
        let mut row = String::new();
        let mut empty = 0;
        for square in Square::all() {
            match self.cell(square) {
                Some(piece) => {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.diagram_char());
                }
                None => empty += 1,
            }
            if (square.index() + 1) % TILES_PER_RANK == 0 {
                if empty > 0 {
                    row.push_str(&empty.to_string());
                    empty = 0;
                }
                rows.push(std::mem::take(&mut row));
            }
        }

        let active = match self.side_to_move() {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        let white = self.white_player();
        let black = self.black_player();
        if white.is_king_side_castle_capable() {
            castling.push('K');
        }
        if white.is_queen_side_castle_capable() {
            castling.push('Q');
        }
        if black.is_king_side_castle_capable() {
            castling.push('k');
        }
        if black.is_queen_side_castle_capable() {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_target()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {} {} {} 0 1", rows.join("/"), active, castling, ep)
    }

    /// The tile a pawn capturing en passant would land on.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        let pawn = self.en_passant_pawn?;
        let behind = -(TILES_PER_RANK as i8) * pawn.color().direction();
        pawn.square().offset(behind)
    }
}
