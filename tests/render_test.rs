//! Console rendering of the queue line, plain and colored.

use tetris_stack::core::PieceQueue;
use tetris_stack::term::{encode_line_into, piece_color, ConsoleRenderer, QueueView};
use tetris_stack::types::{Piece, PieceKind};

fn wrapped_queue() -> PieceQueue {
    let mut q: PieceQueue = PieceQueue::new();
    for id in 0..5 {
        q.enqueue(Piece::new(PieceKind::from_index(id as usize), id)).unwrap();
    }
    for _ in 0..3 {
        q.dequeue().unwrap();
    }
    for id in 5..8 {
        q.enqueue(Piece::new(PieceKind::from_index(id as usize), id)).unwrap();
    }
    q
}

#[test]
fn wrapped_queue_renders_front_to_back() {
    let line = QueueView.queue_line(&wrapped_queue());
    assert_eq!(line.text(), "Piece queue: [L 3] [J 4] [S 5] [Z 6] [I 7]");
}

#[test]
fn colored_line_keeps_text_and_adds_piece_colors() {
    let line = QueueView.queue_line(&wrapped_queue());

    let mut out = Vec::new();
    encode_line_into(&line, true, &mut out).unwrap();
    let s = String::from_utf8(out).unwrap();

    for tag in ["[L 3]", "[J 4]", "[S 5]", "[Z 6]", "[I 7]"] {
        assert!(s.contains(tag), "missing {tag} in {s:?}");
    }
    let l = piece_color(PieceKind::L);
    assert!(s.contains(&format!("38;2;{};{};{}", l.r, l.g, l.b)));
}

#[test]
fn renderer_prints_menu_block() {
    let view = QueueView;
    let mut r = ConsoleRenderer::new(Vec::new(), false);
    r.draw_lines(&view.menu_lines()).unwrap();
    r.prompt(&view.prompt()).unwrap();

    let text = String::from_utf8(r.into_inner()).unwrap();
    assert_eq!(
        text,
        "Actions:\n1 - Play piece (dequeue)\n2 - Insert new piece (enqueue)\n0 - Exit\nChoose: "
    );
}
