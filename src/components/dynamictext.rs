use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, Default)]
/// Dynamic text component for rendering variable strings on screen.
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
}

impl DynamicText {
    /// Creates a new DynamicText component.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}
