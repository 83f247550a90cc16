use std::time::Duration;

pub const IMAGE_ENTER_DELAY: Duration = Duration::from_millis(50); // Window between the image exit and the incoming image activation
pub const IMAGE_CLEANUP_DELAY: Duration = Duration::from_millis(600); // Window between the image enter and clearing exit styling on the old image
pub const CONTENT_ENTER_DELAY: Duration = Duration::from_millis(100); // Window between the content exit and the incoming content activation
pub const CONTENT_CLEANUP_DELAY: Duration = Duration::from_millis(500); // Window between the content enter and its cleanup; the transition lock clears here

pub const FRAME_TIME: Duration = Duration::from_millis(16); // Fixed tick of the demo session loop (~60 FPS)
