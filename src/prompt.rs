//! Prompt templates for document Q&A and summarization

/// Prompt builder for model calls
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the question-answering prompt over a context excerpt
    pub fn build_question_prompt(context: &str, question: &str) -> String {
        format!(
            r#"Use this PDF context to answer the question.
Context:
{context}

Question: {question}
Answer:"#,
            context = context,
            question = question
        )
    }

    /// Build the first-attempt summarization prompt
    pub fn build_summary_prompt(text: &str) -> String {
        format!(
            r#"You are a helpful assistant. Summarize the following PDF content in a clear, concise manner, highlighting the key points and main ideas.
PDF Content:
{text}
Summary:"#,
            text = text
        )
    }

    /// Build the retry prompt used when the first summary comes back too short
    pub fn build_detailed_summary_prompt(text: &str) -> String {
        format!(
            r#"You are a helpful assistant. Please provide a detailed summary of the following PDF content, covering all major points and ideas.
{text}
Summary:"#,
            text = text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_prompt_wraps_context_and_question() {
        let prompt = PromptBuilder::build_question_prompt("Page 1:\nAn invoice.", "What is this?");
        assert_eq!(
            prompt,
            "Use this PDF context to answer the question.\nContext:\nPage 1:\nAn invoice.\n\nQuestion: What is this?\nAnswer:"
        );
    }

    #[test]
    fn test_summary_prompt_wording() {
        let prompt = PromptBuilder::build_summary_prompt("Page 1:\nAn invoice.");
        assert!(prompt.starts_with("You are a helpful assistant. Summarize the following PDF content in a clear, concise manner"));
        assert!(prompt.contains("PDF Content:\nPage 1:\nAn invoice."));
        assert!(prompt.ends_with("Summary:"));
    }

    #[test]
    fn test_detailed_summary_prompt_wording() {
        let prompt = PromptBuilder::build_detailed_summary_prompt("Page 1:\nAn invoice.");
        assert!(prompt.starts_with("You are a helpful assistant. Please provide a detailed summary"));
        assert!(prompt.contains("covering all major points and ideas.\nPage 1:\nAn invoice."));
        assert!(prompt.ends_with("Summary:"));
    }
}
