//! Loop/switch context used to validate `break` and `continue`.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextFrame {
    pub in_loop: bool,
    pub in_switch: bool,
}

/// Only the top frame is consulted. Statements nested in an `if` inherit the
/// frame of the loop around them since `if` pushes nothing.
#[derive(Debug, Default)]
pub struct ContextStack {
    frames: Vec<ContextFrame>,
}

impl ContextStack {
    pub fn push(&mut self, frame: ContextFrame) {
        self.frames.push(frame);
    }

    pub fn enter_loop(&mut self) {
        self.push(ContextFrame {
            in_loop: true,
            in_switch: false,
        });
    }

    /// Function bodies start a fresh frame so that a loop around the
    /// declaration does not leak into the body.
    pub fn enter_function(&mut self) {
        self.push(ContextFrame::default());
    }

    pub fn exit(&mut self) {
        self.frames.pop();
    }

    pub fn allows_break(&self) -> bool {
        self.frames
            .last()
            .map_or(false, |frame| frame.in_loop || frame.in_switch)
    }

    pub fn allows_continue(&self) -> bool {
        self.frames.last().map_or(false, |frame| frame.in_loop)
    }
}
