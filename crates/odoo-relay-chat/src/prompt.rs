//! The Odoo assistant persona and prompt assembly.

use crate::types::ChatTurn;

/// System instruction attached to every provider call. Never derived from
/// request content.
pub const ODOO_SYSTEM_PROMPT: &str = "\
You are an expert Odoo module developer and consultant. Your role is to help users:
1. Write Odoo modules and custom features
2. Understand Odoo architecture and best practices
3. Generate Python code following Odoo conventions
4. Explain Odoo model relationships, views, and workflows
5. Provide documentation and deployment guidance

Always:
- Follow Odoo 18 coding standards
- Provide complete, working code examples
- Include docstrings and comments
- Suggest security best practices
- Warn about common pitfalls";

/// Build the provider message list: the caller's history followed by the
/// new user turn.
pub fn build_contents(history: &[ChatTurn], message: &str) -> Vec<ChatTurn> {
    let mut contents = Vec::with_capacity(history.len() + 2);
    contents.extend_from_slice(history);
    contents.push(ChatTurn::user(message));
    contents
}
