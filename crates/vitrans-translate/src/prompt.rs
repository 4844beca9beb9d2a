//! Fixed Vietnamese instructions sent with each request.

use std::sync::LazyLock;

use vitrans_types::messages::NO_TEXT_FOUND;

/// Response format requested for every call.
pub const RESPONSE_MIME_TYPE: &str = "text/plain";

const TEXT_PREAMBLE: &str = "Đóng vai trò là một chuyên gia có nhiều năm kinh nghiệm về dịch thuật, \
hãy dịch văn bản dưới đây sang tiếng việt một cách ngắn gọn, súc tích, \
tập trung vào ngữ cảnh của văn bản mà không cần nói gì thêm:";

/// Instruction paired with an inline image.
pub static IMAGE_INSTRUCTION: LazyLock<String> = LazyLock::new(|| {
    format!(
        "Đóng vai trò là một chuyên gia dịch thuật. \
         Trích xuất bất kỳ văn bản nào từ hình ảnh này và chỉ cung cấp bản dịch tiếng Việt. \
         Không bao gồm văn bản gốc hay bất kỳ lời giải thích nào. \
         Nếu không có văn bản nào trong ảnh, hãy trả lời '{NO_TEXT_FOUND}'"
    )
});

/// Prompt for a text translation with the source embedded verbatim.
pub fn text_prompt(source_text: &str) -> String {
    format!("{TEXT_PREAMBLE}\n\n{source_text}")
}
