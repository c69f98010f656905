//! Answer query use case.
//!
//! Runs one user question through the reasoning backend, dispatching the
//! documentation tool calls the model requests until it produces a final
//! answer. Sessions are kept in memory so follow-up questions retain
//! conversational context.
//!
//! The tool loop is bounded by [`AgentParams::max_tool_rounds`]; when the
//! model still wants tools past the cap, the last assistant text wins.

use crate::config::AgentParams;
use crate::ports::chat_gateway::{ChatGateway, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::QueryProgress;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use crate::use_cases::tool_helpers::tool_args_preview;
use specscout_domain::prompt::AgentPrompt;
use specscout_domain::session::entities::{Conversation, Message};
use specscout_domain::session::response::{ChatResponse, FinishReason, TokenUsage, ToolInvocation};
use specscout_domain::tool::entities::ToolCall;
use specscout_domain::tool::value_objects::{ToolError, ToolResult};
use specscout_domain::util::truncate_str;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Identifier reported in [`AgentStatus`].
const AGENT_ID: &str = "specscout-agent";

/// Errors that can occur while answering a query.
#[derive(Error, Debug)]
pub enum AnswerQueryError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("No response from model")]
    EmptyResponse,
}

/// Input for the [`AnswerQueryUseCase`].
#[derive(Debug, Clone)]
pub struct AnswerQueryInput {
    /// The user's question.
    pub query: String,
    /// Session to continue; `None` starts a fresh session.
    pub session_id: Option<String>,
}

impl AnswerQueryInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            session_id: None,
        }
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

/// Final result of one answered query.
#[derive(Debug, Clone, serde::Serialize)]
pub struct QueryAnswer {
    /// The assistant's answer text.
    pub answer: String,
    /// Session the exchange was recorded under.
    pub session_id: String,
    /// Tool names dispatched, in execution order (repeats included).
    pub tools_used: Vec<String>,
    /// Number of tool rounds consumed.
    pub tool_rounds: usize,
    /// Token usage accumulated over every backend pass.
    pub usage: TokenUsage,
    /// Model identifier reported by the backend, if any.
    pub model: Option<String>,
    /// Why the final backend pass stopped ("stop", "length", "tool_calls").
    pub finish_reason: String,
}

/// Aggregate counters across all live sessions.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AgentStatus {
    pub agent_id: String,
    pub total_sessions: usize,
    pub total_messages: usize,
    pub model: String,
}

/// Outcome of a single model turn.
enum Turn {
    /// The model requested tool invocations before it can answer.
    ToolsRequested(Vec<ToolInvocation>, String),
    /// The model produced its final text.
    Final(String),
}

impl From<ChatResponse> for Turn {
    fn from(response: ChatResponse) -> Self {
        if response.has_tool_calls() {
            Turn::ToolsRequested(response.tool_invocations, response.content)
        } else {
            Turn::Final(response.content)
        }
    }
}

/// What the tool loop produced, before session bookkeeping.
struct Driven {
    answer: String,
    rounds: usize,
    tools_used: Vec<String>,
    usage: TokenUsage,
    model: Option<String>,
    finish_reason: FinishReason,
}

/// Use case for answering a documentation query.
///
/// Executes the tool loop:
/// 1. Append the question to the session conversation
/// 2. Ask the backend, offering the full tool schema
/// 3. While the model requests tools (up to `max_tool_rounds`), dispatch
///    them in request order and feed the results back
/// 4. Record the final answer in the session and return it
pub struct AnswerQueryUseCase {
    gateway: Arc<dyn ChatGateway>,
    tool_executor: Arc<dyn ToolExecutorPort>,
    tool_schema: Arc<dyn ToolSchemaPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
    params: AgentParams,
    sessions: Mutex<HashMap<String, Conversation>>,
}

impl AnswerQueryUseCase {
    pub fn new(
        gateway: Arc<dyn ChatGateway>,
        tool_executor: Arc<dyn ToolExecutorPort>,
        tool_schema: Arc<dyn ToolSchemaPort>,
        params: AgentParams,
    ) -> Self {
        Self {
            gateway,
            tool_executor,
            tool_schema,
            conversation_logger: Arc::new(NoConversationLogger),
            params,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Answer one query, with progress callbacks.
    pub async fn execute(
        &self,
        input: AnswerQueryInput,
        progress: &dyn QueryProgress,
    ) -> Result<QueryAnswer, AnswerQueryError> {
        info!("Answering query: {}", truncate_str(&input.query, 100));

        let session_id = input
            .session_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let mut conversation = self.take_session(&session_id).await;

        conversation.add_user_message(&input.query);
        self.conversation_logger.log(ConversationEvent::new(
            "user_query",
            serde_json::json!({
                "session_id": session_id,
                "text": input.query,
            }),
        ));

        let outcome = self.drive(&mut conversation, &input.query, progress).await;

        if let Ok(driven) = &outcome {
            conversation.add_assistant_message(&driven.answer);
            conversation.trim(self.params.history_limit);
        }
        // The session is written back even on failure so the question
        // survives into the next turn.
        self.store_session(conversation).await;

        let driven = outcome?;
        progress.on_answer_ready();
        info!(
            "Query answered in {} tool round(s), {} tokens",
            driven.rounds, driven.usage.total_tokens
        );

        self.conversation_logger.log(ConversationEvent::new(
            "model_response",
            serde_json::json!({
                "session_id": session_id,
                "model": driven.model,
                "tool_rounds": driven.rounds,
                "tools_used": driven.tools_used,
                "total_tokens": driven.usage.total_tokens,
                "bytes": driven.answer.len(),
                "text": driven.answer,
            }),
        ));

        Ok(QueryAnswer {
            answer: driven.answer,
            session_id,
            tools_used: driven.tools_used,
            tool_rounds: driven.rounds,
            usage: driven.usage,
            model: driven.model,
            finish_reason: driven.finish_reason.as_str().to_string(),
        })
    }

    /// Run the bounded tool loop until the model settles on an answer.
    async fn drive(
        &self,
        conversation: &mut Conversation,
        query: &str,
        progress: &dyn QueryProgress,
    ) -> Result<Driven, AnswerQueryError> {
        let tools = self
            .tool_schema
            .all_tools_schema(self.tool_executor.definitions());
        debug!("{} tools offered to the model", tools.len());

        let mut usage = TokenUsage::default();
        let mut model = None;
        // Overwritten on every backend pass; the fallback path keeps Stop.
        let mut finish_reason = FinishReason::Stop;
        let mut tools_used = Vec::new();
        let mut rounds = 0;

        let answer = loop {
            progress.on_model_turn(rounds);
            let response = match self.gateway.complete(conversation.messages(), &tools).await {
                Ok(response) => response,
                Err(e) if e.is_not_configured() => {
                    info!("No reasoning backend configured, returning setup instructions");
                    break AgentPrompt::fallback_answer(query);
                }
                Err(e) => return Err(AnswerQueryError::Gateway(e)),
            };

            usage.add(&response.usage);
            if response.model.is_some() {
                model = response.model.clone();
            }
            finish_reason = response.finish_reason.clone();

            match Turn::from(response) {
                Turn::ToolsRequested(invocations, content)
                    if rounds < self.params.max_tool_rounds =>
                {
                    rounds += 1;
                    debug!(
                        "Tool round {}/{}: {} call(s)",
                        rounds,
                        self.params.max_tool_rounds,
                        invocations.len()
                    );

                    conversation.push(Message::assistant_with_tool_calls(
                        content,
                        invocations.clone(),
                    ));

                    // Dispatch sequentially, in the order the model asked.
                    for invocation in &invocations {
                        let result = self.dispatch(invocation, progress).await;
                        tools_used.push(invocation.name.clone());
                        conversation.push(Message::tool_result(
                            &invocation.id,
                            &invocation.name,
                            result.render_for_model(),
                        ));
                    }
                }
                Turn::ToolsRequested(_, content) => {
                    warn!(
                        "Tool loop hit max_tool_rounds ({}), answering with last text",
                        self.params.max_tool_rounds
                    );
                    break content;
                }
                Turn::Final(content) => break content,
            }
        };

        if answer.is_empty() {
            return Err(AnswerQueryError::EmptyResponse);
        }

        Ok(Driven {
            answer,
            rounds,
            tools_used,
            usage,
            model,
            finish_reason,
        })
    }

    /// Execute one tool invocation, turning malformed arguments into a
    /// structured error result the model can read.
    async fn dispatch(
        &self,
        invocation: &ToolInvocation,
        progress: &dyn QueryProgress,
    ) -> ToolResult {
        let call = match invocation.parse_arguments() {
            Ok(arguments) => ToolCall::from_native(&invocation.id, &invocation.name, arguments),
            Err(e) => {
                warn!(
                    "Malformed arguments for tool '{}': {}",
                    invocation.name, e
                );
                let result = ToolResult::failure(
                    &invocation.name,
                    ToolError::invalid_argument(format!(
                        "Tool arguments are not a valid JSON object: {}",
                        e
                    )),
                );
                self.log_tool_result(invocation, &result);
                return result;
            }
        };

        progress.on_tool_start(&invocation.name, &tool_args_preview(&call));
        let started = Instant::now();
        let result = self.tool_executor.execute(&call).await;
        let duration_ms = result
            .metadata
            .duration_ms
            .unwrap_or_else(|| started.elapsed().as_millis() as u64);
        progress.on_tool_finish(&invocation.name, result.is_success(), duration_ms);

        self.log_tool_result(invocation, &result);
        result
    }

    fn log_tool_result(&self, invocation: &ToolInvocation, result: &ToolResult) {
        self.conversation_logger.log(ConversationEvent::new(
            "tool_result",
            serde_json::json!({
                "tool": invocation.name,
                "call_id": invocation.id,
                "success": result.is_success(),
                "bytes": result.output().map(str::len).unwrap_or(0),
            }),
        ));
    }

    // ==================== Session Accessors ====================

    /// Messages of a session, most recent `limit` entries.
    pub async fn history(&self, session_id: &str, limit: usize) -> Vec<Message> {
        let sessions = self.sessions.lock().await;
        sessions
            .get(session_id)
            .map(|c| c.recent(limit).to_vec())
            .unwrap_or_default()
    }

    /// Remove a session. Returns true if it existed.
    pub async fn clear_session(&self, session_id: &str) -> bool {
        self.sessions.lock().await.remove(session_id).is_some()
    }

    /// Aggregate counters across all live sessions.
    pub async fn status(&self) -> AgentStatus {
        let sessions = self.sessions.lock().await;
        AgentStatus {
            agent_id: AGENT_ID.to_string(),
            total_sessions: sessions.len(),
            total_messages: sessions.values().map(|c| c.len()).sum(),
            model: self.gateway.model_name().to_string(),
        }
    }

    /// Take the conversation out of the store, creating it on first use.
    ///
    /// The lock is never held across a backend call; the conversation is
    /// removed here and written back by [`store_session`](Self::store_session).
    async fn take_session(&self, session_id: &str) -> Conversation {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(session_id).unwrap_or_else(|| {
            debug!("Starting new session {}", session_id);
            Conversation::with_system_prompt(session_id, AgentPrompt::system())
        })
    }

    async fn store_session(&self, conversation: Conversation) {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(conversation.id().to_string(), conversation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use specscout_domain::session::entities::Role;
    use specscout_domain::tool::entities::ToolDefinition;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGateway {
        responses: Mutex<VecDeque<Result<ChatResponse, GatewayError>>>,
        seen: Mutex<Vec<Vec<Message>>>,
    }

    impl MockGateway {
        fn scripted(responses: Vec<ChatResponse>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().map(Ok).collect()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: GatewayError) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from([Err(error)])),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn seen_messages(&self) -> Vec<Vec<Message>> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatGateway for MockGateway {
        async fn complete(
            &self,
            messages: &[Message],
            _tools: &[serde_json::Value],
        ) -> Result<ChatResponse, GatewayError> {
            self.seen.lock().unwrap().push(messages.to_vec());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
        }

        fn model_name(&self) -> &str {
            "mock-model"
        }
    }

    struct MockToolExecutor {
        definitions: Vec<ToolDefinition>,
        results: Mutex<VecDeque<ToolResult>>,
        calls: Mutex<Vec<ToolCall>>,
    }

    impl MockToolExecutor {
        fn new(results: Vec<ToolResult>) -> Self {
            Self {
                definitions: vec![
                    ToolDefinition::new("search_spec", "Search cached endpoints"),
                    ToolDefinition::new("load_spec", "Load an OpenAPI document"),
                ],
                results: Mutex::new(results.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn recorded_calls(&self) -> Vec<ToolCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ToolExecutorPort for MockToolExecutor {
        fn definitions(&self) -> &[ToolDefinition] {
            &self.definitions
        }

        async fn execute(&self, call: &ToolCall) -> ToolResult {
            self.calls.lock().unwrap().push(call.clone());
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| ToolResult::success(&call.tool_name, "{}"))
        }
    }

    struct MockToolSchema;

    impl ToolSchemaPort for MockToolSchema {
        fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
            serde_json::json!({
                "type": "function",
                "function": { "name": tool.name, "description": tool.description }
            })
        }

        fn all_tools_schema(&self, tools: &[ToolDefinition]) -> Vec<serde_json::Value> {
            tools.iter().map(|t| self.tool_to_schema(t)).collect()
        }
    }

    fn use_case(gateway: Arc<MockGateway>, executor: Arc<MockToolExecutor>) -> AnswerQueryUseCase {
        AnswerQueryUseCase::new(
            gateway,
            executor,
            Arc::new(MockToolSchema),
            AgentParams::default(),
        )
    }

    fn text_response(text: &str) -> ChatResponse {
        ChatResponse {
            content: text.to_string(),
            tool_invocations: Vec::new(),
            finish_reason: FinishReason::Stop,
            model: Some("test-model".to_string()),
            usage: TokenUsage::new(10, 5, 15),
        }
    }

    fn tool_response(name: &str, id: &str, arguments: &str) -> ChatResponse {
        ChatResponse {
            content: String::new(),
            tool_invocations: vec![ToolInvocation::new(id, name, arguments)],
            finish_reason: FinishReason::ToolCalls,
            model: Some("test-model".to_string()),
            usage: TokenUsage::new(20, 7, 27),
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_answers_without_tools() {
        let gateway = Arc::new(MockGateway::scripted(vec![text_response(
            "GET /pets lists all pets.",
        )]));
        let executor = Arc::new(MockToolExecutor::new(vec![]));
        let use_case = use_case(gateway.clone(), executor);

        let answer = use_case
            .execute(AnswerQueryInput::new("How do I list pets?"), &NoProgress)
            .await
            .unwrap();

        assert_eq!(answer.answer, "GET /pets lists all pets.");
        assert!(!answer.session_id.is_empty());
        assert!(answer.tools_used.is_empty());
        assert_eq!(answer.tool_rounds, 0);
        assert_eq!(answer.usage.total_tokens, 15);
        assert_eq!(answer.model.as_deref(), Some("test-model"));
        assert_eq!(answer.finish_reason, "stop");

        // Session recorded: system prompt, question, answer.
        let history = use_case.history(&answer.session_id, 50).await;
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].role, Role::System);
        assert_eq!(history[2].content, "GET /pets lists all pets.");
    }

    #[tokio::test]
    async fn test_tool_round_follows_protocol_order() {
        let gateway = Arc::new(MockGateway::scripted(vec![
            tool_response("search_spec", "call_1", r#"{"query":"pets"}"#),
            text_response("Use GET /pets."),
        ]));
        let executor = Arc::new(MockToolExecutor::new(vec![ToolResult::success(
            "search_spec",
            r#"{"status":"success","total_found":1}"#,
        )]));
        let use_case = use_case(gateway.clone(), executor.clone());

        let answer = use_case
            .execute(AnswerQueryInput::new("Find the pets endpoint"), &NoProgress)
            .await
            .unwrap();

        assert_eq!(answer.answer, "Use GET /pets.");
        assert_eq!(answer.tools_used, vec!["search_spec"]);
        assert_eq!(answer.tool_rounds, 1);

        // Second backend pass must see: system, user, assistant(tool_calls), tool.
        let seen = gateway.seen_messages();
        assert_eq!(seen.len(), 2);
        let second = &seen[1];
        assert_eq!(second.len(), 4);
        assert_eq!(second[2].role, Role::Assistant);
        assert_eq!(second[2].tool_calls.len(), 1);
        assert_eq!(second[3].role, Role::Tool);
        assert_eq!(second[3].tool_call_id.as_deref(), Some("call_1"));
        assert_eq!(second[3].tool_name.as_deref(), Some("search_spec"));
        assert_eq!(second[3].content, r#"{"status":"success","total_found":1}"#);

        // The executor received the parsed arguments and the native id.
        let calls = executor.recorded_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].native_id.as_deref(), Some("call_1"));
        assert_eq!(calls[0].get_string("query"), Some("pets"));
    }

    #[tokio::test]
    async fn test_malformed_arguments_become_error_results() {
        let gateway = Arc::new(MockGateway::scripted(vec![
            tool_response("search_spec", "call_1", "{not json"),
            text_response("Sorry, the search failed."),
        ]));
        let executor = Arc::new(MockToolExecutor::new(vec![]));
        let use_case = use_case(gateway.clone(), executor.clone());

        let answer = use_case
            .execute(AnswerQueryInput::new("Search something"), &NoProgress)
            .await
            .unwrap();

        assert_eq!(answer.answer, "Sorry, the search failed.");
        // The executor never ran; the model still got a structured error.
        assert!(executor.recorded_calls().is_empty());
        let seen = gateway.seen_messages();
        let tool_message = &seen[1][3];
        assert_eq!(tool_message.role, Role::Tool);
        assert!(tool_message.content.contains("INVALID_ARGUMENT"));
    }

    #[tokio::test]
    async fn test_stops_at_max_tool_rounds() {
        let mut responses = vec![
            tool_response("search_spec", "call_1", r#"{"query":"a"}"#),
            tool_response("search_spec", "call_2", r#"{"query":"b"}"#),
        ];
        let mut capped = tool_response("search_spec", "call_3", r#"{"query":"c"}"#);
        capped.content = "Here is what I found so far.".to_string();
        responses.push(capped);

        let gateway = Arc::new(MockGateway::scripted(responses));
        let executor = Arc::new(MockToolExecutor::new(vec![]));
        let use_case = AnswerQueryUseCase::new(
            gateway.clone(),
            executor.clone(),
            Arc::new(MockToolSchema),
            AgentParams::default().with_max_tool_rounds(2),
        );

        let answer = use_case
            .execute(AnswerQueryInput::new("Deep question"), &NoProgress)
            .await
            .unwrap();

        assert_eq!(answer.answer, "Here is what I found so far.");
        assert_eq!(answer.tool_rounds, 2);
        assert_eq!(answer.finish_reason, "tool_calls");
        // The third batch was never dispatched.
        assert_eq!(executor.recorded_calls().len(), 2);
    }

    #[tokio::test]
    async fn test_fallback_when_not_configured() {
        let gateway = Arc::new(MockGateway::failing(GatewayError::NotConfigured(
            "OPENAI_API_KEY not set".to_string(),
        )));
        let executor = Arc::new(MockToolExecutor::new(vec![]));
        let use_case = use_case(gateway, executor);

        let answer = use_case
            .execute(AnswerQueryInput::new("How do I list pets?"), &NoProgress)
            .await
            .unwrap();

        assert!(answer.answer.contains("OPENAI_API_KEY"));
        assert!(answer.answer.contains("How do I list pets?"));
        assert_eq!(answer.usage, TokenUsage::default());
        assert!(answer.model.is_none());
        assert_eq!(answer.finish_reason, "stop");

        // The fallback is recorded in the session like a normal answer.
        let history = use_case.history(&answer.session_id, 50).await;
        assert_eq!(history.len(), 3);
    }

    #[tokio::test]
    async fn test_session_reuse_keeps_context() {
        let gateway = Arc::new(MockGateway::scripted(vec![
            text_response("First answer"),
            text_response("Second answer"),
        ]));
        let executor = Arc::new(MockToolExecutor::new(vec![]));
        let use_case = use_case(gateway.clone(), executor);

        let first = use_case
            .execute(
                AnswerQueryInput::new("First question").with_session("sess-1"),
                &NoProgress,
            )
            .await
            .unwrap();
        assert_eq!(first.session_id, "sess-1");

        use_case
            .execute(
                AnswerQueryInput::new("Second question").with_session("sess-1"),
                &NoProgress,
            )
            .await
            .unwrap();

        // The second pass carried the whole first exchange.
        let seen = gateway.seen_messages();
        assert_eq!(seen[1].len(), 4);
        assert_eq!(seen[1][0].role, Role::System);
        assert_eq!(seen[1][2].content, "First answer");
        assert_eq!(seen[1][3].content, "Second question");

        let history = use_case.history("sess-1", 50).await;
        assert_eq!(history.len(), 5);
    }

    #[tokio::test]
    async fn test_long_sessions_are_trimmed() {
        let responses: Vec<_> = (0..4).map(|i| text_response(&format!("answer {}", i))).collect();
        let gateway = Arc::new(MockGateway::scripted(responses));
        let executor = Arc::new(MockToolExecutor::new(vec![]));
        let use_case = AnswerQueryUseCase::new(
            gateway,
            executor,
            Arc::new(MockToolSchema),
            AgentParams::default().with_history_limit(5),
        );

        for i in 0..4 {
            use_case
                .execute(
                    AnswerQueryInput::new(format!("question {}", i)).with_session("sess-1"),
                    &NoProgress,
                )
                .await
                .unwrap();
        }

        // Limit 5 keeps the system prompt plus the last 3 messages.
        let history = use_case.history("sess-1", 50).await;
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].role, Role::System);
        assert_eq!(history[3].content, "answer 3");
    }

    #[tokio::test]
    async fn test_usage_accumulates_across_rounds() {
        let gateway = Arc::new(MockGateway::scripted(vec![
            tool_response("search_spec", "call_1", r#"{"query":"pets"}"#),
            text_response("Done."),
        ]));
        let executor = Arc::new(MockToolExecutor::new(vec![]));
        let use_case = use_case(gateway, executor);

        let answer = use_case
            .execute(AnswerQueryInput::new("Question"), &NoProgress)
            .await
            .unwrap();

        assert_eq!(answer.usage.prompt_tokens, 30);
        assert_eq!(answer.usage.completion_tokens, 12);
        assert_eq!(answer.usage.total_tokens, 42);
    }

    #[tokio::test]
    async fn test_empty_final_response_is_error() {
        let gateway = Arc::new(MockGateway::scripted(vec![text_response("")]));
        let executor = Arc::new(MockToolExecutor::new(vec![]));
        let use_case = use_case(gateway, executor);

        let result = use_case
            .execute(AnswerQueryInput::new("Hello?"), &NoProgress)
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AnswerQueryError::EmptyResponse
        ));
    }

    #[tokio::test]
    async fn test_status_and_clear_session() {
        let gateway = Arc::new(MockGateway::scripted(vec![
            text_response("a"),
            text_response("b"),
        ]));
        let executor = Arc::new(MockToolExecutor::new(vec![]));
        let use_case = use_case(gateway, executor);

        use_case
            .execute(
                AnswerQueryInput::new("q1").with_session("sess-1"),
                &NoProgress,
            )
            .await
            .unwrap();
        use_case
            .execute(
                AnswerQueryInput::new("q2").with_session("sess-2"),
                &NoProgress,
            )
            .await
            .unwrap();

        let status = use_case.status().await;
        assert_eq!(status.agent_id, "specscout-agent");
        assert_eq!(status.total_sessions, 2);
        assert_eq!(status.total_messages, 6);
        assert_eq!(status.model, "mock-model");

        assert!(use_case.clear_session("sess-1").await);
        assert!(!use_case.clear_session("sess-1").await);
        assert!(use_case.history("sess-1", 50).await.is_empty());
        assert_eq!(use_case.status().await.total_sessions, 1);
    }
}
