const SYSTEM_PROMPT: &str = "You are a helpful assistant for text processing tasks. You are given a file and an instruction, and you need to update the file content based on the instruction. You should only return the updated file content, without any additional text or comments. Please don't encapsulate the response in Markdown or any other formatting.";

/// The fixed system directive sent with every update.
pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

/// The user message: the whole file between `---` fences, then the instruction.
pub fn build_user_prompt(content: &str, instruction: &str) -> String {
    format!(
        "\nThe following is the content of a file:\n---\n{content}\n---\nInstruction: \"{instruction}\"\n\nPerform the requested update and return the updated file content.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_exact_text() {
        assert_eq!(
            system_prompt(),
            "You are a helpful assistant for text processing tasks. \
             You are given a file and an instruction, and you need to update the file content based on the instruction. \
             You should only return the updated file content, without any additional text or comments. \
             Please don't encapsulate the response in Markdown or any other formatting."
        );
    }

    #[test]
    fn user_prompt_exact_text() {
        assert_eq!(
            build_user_prompt("hello", "uppercase it"),
            "\nThe following is the content of a file:\n---\nhello\n---\nInstruction: \"uppercase it\"\n\nPerform the requested update and return the updated file content.\n"
        );
    }

    #[test]
    fn system_prompt_forbids_extra_text() {
        let prompt = system_prompt();
        assert!(prompt.contains("only return the updated file content"));
        assert!(prompt.contains("Markdown"));
    }

    #[test]
    fn user_prompt_embeds_content_and_instruction() {
        let prompt = build_user_prompt("hello", "uppercase it");
        assert!(prompt.contains("---\nhello\n---"));
        assert!(prompt.contains("Instruction: \"uppercase it\""));
        assert!(prompt.ends_with("return the updated file content.\n"));
    }

    #[test]
    fn user_prompt_keeps_content_verbatim() {
        let content = "fn main() {\n    println!(\"{}\", 1);\n}\n";
        let prompt = build_user_prompt(content, "rename main");
        assert!(prompt.contains(content));
    }

    #[test]
    fn user_prompt_with_empty_file() {
        let prompt = build_user_prompt("", "add a header");
        assert!(prompt.contains("---\n\n---"));
    }
}
