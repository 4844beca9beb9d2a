use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;

use vitrans_controller::{ImageController, InteractionController, Submission, TextController};
use vitrans_media::SelectedImage;
use vitrans_translate::Translator;
use vitrans_types::TranslationMode;

/// What a line typed inside a translator means.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Back,
    Exit,
    Input(&'a str),
}

fn parse_line(line: &str) -> Line<'_> {
    match line.trim() {
        "back" | "quay lại" => Line::Back,
        "exit" | "quit" => Line::Exit,
        _ => Line::Input(line.trim_end_matches(['\r', '\n'])),
    }
}

/// Landing selector choice.
fn parse_selection(line: &str) -> Option<TranslationMode> {
    match line.trim() {
        "1" | "image" | "ảnh" => Some(TranslationMode::Image),
        "2" | "text" | "văn bản" => Some(TranslationMode::Text),
        _ => None,
    }
}

fn print_landing() {
    println!("Web App Dịch Nội Dung Sang Tiếng Việt");
    println!("Chọn phương thức dịch của bạn\n");
    println!("  1. Dịch từ ảnh     Tải ảnh lên để trích xuất và dịch văn bản.");
    println!("  2. Dịch văn bản    Nhập hoặc dán văn bản để dịch trực tiếp.");
    println!("\nType 1 or 2, or 'exit' to quit.");
}

/// Output panel for the copyable result; nothing when there is none.
fn result_block(copyable: Option<&str>) -> Option<String> {
    copyable.map(|text| format!("Bản dịch (Tiếng Việt):\n{text}"))
}

/// Submit the current input and print whatever the mode now shows.
async fn submit_and_render<I: Submission>(controller: &InteractionController<I>) {
    if controller.can_submit() {
        println!("Đang dịch...");
    }
    let state = controller.submit().await;
    if let Some(error) = &state.error {
        eprintln!("{error}");
    }
    if let Some(block) = result_block(controller.copyable_result().as_deref()) {
        println!("{block}");
    }
}

/// Read one line; `None` on EOF.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}> ");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line))
}

/// Run the interactive mode selector and translators.
pub async fn run_shell(translator: Arc<Translator>) -> Result<()> {
    let text = TextController::new(translator.clone());
    let image = ImageController::new(translator);
    let mut mode = TranslationMode::Select;

    print_landing();
    loop {
        match mode {
            TranslationMode::Select => {
                let Some(line) = prompt("")? else { break };
                if parse_line(&line) == Line::Exit {
                    break;
                }
                match parse_selection(&line) {
                    Some(selected) => {
                        mode = selected;
                        println!("Type 'back' to return to the menu.");
                    }
                    None => println!("Type 1 or 2."),
                }
            }
            TranslationMode::Text => {
                let Some(line) = prompt("văn bản")? else { break };
                match parse_line(&line) {
                    Line::Back => {
                        mode = TranslationMode::Select;
                        print_landing();
                    }
                    Line::Exit => break,
                    Line::Input(input) => {
                        text.edit(input.to_string());
                        submit_and_render(&text).await;
                    }
                }
            }
            TranslationMode::Image => {
                let Some(line) = prompt("ảnh")? else { break };
                match parse_line(&line) {
                    Line::Back => {
                        mode = TranslationMode::Select;
                        print_landing();
                    }
                    Line::Exit => break,
                    Line::Input(path) => {
                        let path = path.trim();
                        let selection = (!path.is_empty()).then(|| SelectedImage::new(path));
                        if let Some(selected) = &selection {
                            println!("Đã chọn: {}", selected.display_name());
                        }
                        image.edit(selection);
                        submit_and_render(&image).await;
                    }
                }
            }
        }
    }

    println!("Tạm biệt!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1\n"), Some(TranslationMode::Image));
        assert_eq!(parse_selection(" text "), Some(TranslationMode::Text));
        assert_eq!(parse_selection("3"), None);
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("back\n"), Line::Back);
        assert_eq!(parse_line("quay lại"), Line::Back);
        assert_eq!(parse_line("exit\r\n"), Line::Exit);
        assert_eq!(parse_line("  Hello world\n"), Line::Input("  Hello world"));
        assert_eq!(parse_line("\n"), Line::Input(""));
    }

    #[test]
    fn test_result_block_follows_copyable_result() {
        assert_eq!(result_block(None), None);
        assert_eq!(
            result_block(Some("Xin chào")).as_deref(),
            Some("Bản dịch (Tiếng Việt):\nXin chào")
        );
    }
}
