//! AI adapter module. Implements AiPort for LLM integration.
//!
//! Provides a Gemini generateContent adapter and a mock adapter for testing.

pub mod gemini_adapter;
pub mod mock_adapter;

pub use gemini_adapter::GeminiAdapter;
pub use mock_adapter::MockAiAdapter;
