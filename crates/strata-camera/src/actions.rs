//! Input action names read by the camera controller.

pub const MOVE_FORWARD: &str = "move_forward";
pub const MOVE_BACK: &str = "move_back";
pub const MOVE_LEFT: &str = "move_left";
pub const MOVE_RIGHT: &str = "move_right";
pub const MOVE_UP: &str = "move_up";
pub const MOVE_DOWN: &str = "move_down";
pub const TURN_LEFT: &str = "turn_left";
pub const TURN_RIGHT: &str = "turn_right";
pub const LOOK_UP: &str = "look_up";
pub const LOOK_DOWN: &str = "look_down";
pub const GEAR_DOWN: &str = "gear_down";
pub const GEAR_UP: &str = "gear_up";

/// Every camera action, for binding tables and input scripts.
pub const ALL: [&str; 12] = [
    MOVE_FORWARD,
    MOVE_BACK,
    MOVE_LEFT,
    MOVE_RIGHT,
    MOVE_UP,
    MOVE_DOWN,
    TURN_LEFT,
    TURN_RIGHT,
    LOOK_UP,
    LOOK_DOWN,
    GEAR_DOWN,
    GEAR_UP,
];
