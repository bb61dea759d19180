//! Prompt templates and rendering.
//!
//! The template texts are fixed wording the story and image services are known
//! to respond well to for toddler-aged output. Both templates are editable in
//! the UI; the render functions accept whatever text came back from the form.

/// System role for the story completion call.
pub const STORY_SYSTEM_ROLE: &str = "You are a children's story writer.";

/// Instruction appended to every rendered story prompt.
pub const RESPOND_PLAINLY: &str = "\n\nRespond without further explanations or comments. ";

/// Placeholder the story template carries for the user's idea.
pub const IDEA_PLACEHOLDER: &str = "{story_idea}";

/// Default story prompt template.
pub const DEFAULT_STORY_TEMPLATE: &str = "Create a simple story of about 100 words in American English, based on the following ideas:\n\n```\n{story_idea}\n```\n\n Make sure the story suitable for 2-3 year-old toddlers. Use plain and everyday vocabulary, short sentences, and preferably has some rhyming lines.";

/// Default image style text, appended after the story in the image prompt.
pub const DEFAULT_IMAGE_STYLE: &str = "The style should be simple and playful, with soft, warm colors. The image should be suitable for a 2-year-old child, with clear, easy-to-recognize elements. Ensure that the scene evokes warmth, friendliness, and is rich in visual storytelling, but not overly complex. The composition should be balanced and visually engaging, with a focus on creating a comforting and imaginative atmosphere for storytelling.";

/// Render a story prompt by substituting the idea into the template.
pub fn render_story_prompt(template: &str, idea: &str) -> String {
    template.replace(IDEA_PLACEHOLDER, idea)
}

/// Render an image prompt from the story text and a style text.
pub fn render_image_prompt(story: &str, style: &str) -> String {
    format!(
        "Generate an image based on the following story: \n\n'{}'\n\n {}",
        story, style
    )
}
