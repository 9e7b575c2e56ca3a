use ammonia;

/// Clean owner-written rich text (bios, descriptions) using the ammonia library.
///
/// Safe formatting tags (<b>, <p>, <a>) survive so the home page can render
/// them unescaped; <script>, <iframe> and event-handler attributes are stripped.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}
