use super::shapes::Shape;

/// What a key press asks the view to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    SelectShape(Shape),
    CycleColor,
    Explode,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    if let Some(shape) = Shape::for_digit(key) {
        return Some(KeyAction::SelectShape(shape));
    }
    match key {
        "c" | "C" => Some(KeyAction::CycleColor),
        " " => Some(KeyAction::Explode),
        _ => None,
    }
}
