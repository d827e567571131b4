use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use super::utils::{build_showcase, parse_industry, parse_role, print_case_detail, print_case_row};
use showcase_application::{HandoffOutcome, ShowcaseUseCase, SubmitOutcome, SubmitRejection};
use showcase_core::case::{CaseDraft, Industry, Role};
use showcase_core::chat::{
    ChatMessage, PendingFramework, QuickReply, Segment, default_quick_replies,
};

const REPL_COMMANDS: [&str; 12] = [
    "/help", "/quick", "/send", "/open", "/ref", "/cases", "/role", "/industry", "/search",
    "/publish", "/close", "/exit",
];

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: REPL_COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// One line of REPL input.
#[derive(Debug, PartialEq, Eq)]
enum ReplInput<'a> {
    Help,
    Exit,
    Quick(Option<&'a str>),
    Send,
    Open(&'a str),
    Ref(&'a str),
    Cases,
    Role(&'a str),
    Industry(&'a str),
    Search(&'a str),
    Publish(&'a str),
    Close,
    Unknown(&'a str),
    Message(&'a str),
}

impl<'a> ReplInput<'a> {
    fn parse(line: &'a str) -> Self {
        if !line.starts_with('/') {
            return ReplInput::Message(line);
        }

        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        match command {
            "/help" => ReplInput::Help,
            "/exit" | "/quit" => ReplInput::Exit,
            "/quick" => ReplInput::Quick((!rest.is_empty()).then_some(rest)),
            "/send" => ReplInput::Send,
            "/open" => ReplInput::Open(rest),
            "/ref" => ReplInput::Ref(rest),
            "/cases" => ReplInput::Cases,
            "/role" => ReplInput::Role(rest),
            "/industry" => ReplInput::Industry(rest),
            "/search" => ReplInput::Search(rest),
            "/publish" => ReplInput::Publish(rest),
            "/close" => ReplInput::Close,
            other => ReplInput::Unknown(other),
        }
    }
}

/// Runs the interactive advisor chat until `/exit` or EOF.
pub async fn run(config_dir: Option<&Path>, no_greeting: bool) -> Result<()> {
    let showcase = build_showcase(config_dir, no_greeting).await?;
    tracing::info!("[Showcase] Chat session {} started", showcase.chat().session_id());
    let quick_replies = default_quick_replies();

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== TPI 智慧架構室 ===".bright_magenta().bold());
    println!(
        "{}",
        "Type a question, '/quick <n>' for a suggestion, '/help' for commands, or '/exit' to leave."
            .bright_black()
    );
    println!();
    for message in showcase.chat().transcript().await {
        print_message(&showcase, &message);
    }
    print_quick_replies(&quick_replies);

    loop {
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/exit' to exit.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);

        match ReplInput::parse(trimmed) {
            ReplInput::Exit => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            ReplInput::Help => print_help(),
            ReplInput::Message(text) => submit(&showcase, text).await,
            ReplInput::Quick(None) => print_quick_replies(&quick_replies),
            ReplInput::Quick(Some(index)) => match pick(&quick_replies, index) {
                Some(quick) => {
                    println!("{}", format!("> {}", quick.prompt).green());
                    let outcome = showcase.chat().submit_quick_reply(quick).await;
                    print_outcome(&showcase, outcome);
                }
                None => warn(&format!("No quick reply #{index}")),
            },
            ReplInput::Send => confirm_handoff(&showcase).await,
            ReplInput::Open(id) => match showcase.open_case(id).await {
                Some(case) => print_case_detail(&case),
                None => warn(&format!("No case with id '{id}'")),
            },
            ReplInput::Ref(index) => open_reference(&showcase, index).await,
            ReplInput::Cases => {
                let filter = showcase.filter().await;
                println!(
                    "{}",
                    format!(
                        "role={} industry={} search='{}'",
                        filter.role, filter.industry, filter.query
                    )
                    .bright_black()
                );
                for case in showcase.visible_cases().await {
                    print_case_row(&case);
                }
            }
            ReplInput::Role(value) => match parse_role(value) {
                Ok(role) => showcase.set_role_filter(role).await,
                Err(err) => warn(&err.to_string()),
            },
            ReplInput::Industry(value) => match parse_industry(value) {
                Ok(industry) => showcase.set_industry_filter(industry).await,
                Err(err) => warn(&err.to_string()),
            },
            ReplInput::Search(text) => showcase.set_search_query(text).await,
            ReplInput::Publish(args) => publish(&showcase, args),
            ReplInput::Close => showcase.close_case().await,
            ReplInput::Unknown(command) => warn(&format!("Unknown command {command}")),
        }
    }

    showcase.chat().close().await;
    Ok(())
}

async fn submit(showcase: &ShowcaseUseCase, text: &str) {
    println!("{}", format!("> {text}").green());
    println!("{}", "顧問分析中...".bright_black());
    let outcome = showcase.submit_query(text).await;
    print_outcome(showcase, outcome);
}

fn print_outcome(showcase: &ShowcaseUseCase, outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Answered { reply, framework } => {
            print_message(showcase, &reply);
            if let Some(framework) = framework {
                print_framework(&framework);
            }
        }
        SubmitOutcome::Rejected(SubmitRejection::Busy) => {
            warn("The advisor is still answering the previous question.")
        }
        SubmitOutcome::Rejected(SubmitRejection::Closed) => warn("This chat has ended."),
        SubmitOutcome::Rejected(SubmitRejection::Empty) | SubmitOutcome::Discarded => {}
    }
}

async fn confirm_handoff(showcase: &ShowcaseUseCase) {
    match showcase.chat().pending_framework().await {
        Some(framework) if !framework.is_submitting() => {
            println!("{}", "提交中...".bright_black());
        }
        _ => {
            warn("There is no framework waiting to be submitted.");
            return;
        }
    }

    match showcase.confirm_framework_handoff().await {
        HandoffOutcome::Confirmed(message) => print_message(showcase, &message),
        HandoffOutcome::Ignored => warn("There is no framework waiting to be submitted."),
        HandoffOutcome::Discarded => {}
    }
}

async fn open_reference(showcase: &ShowcaseUseCase, index: &str) {
    let transcript = showcase.chat().transcript().await;
    let references: Vec<Segment> = transcript
        .iter()
        .rev()
        .find(|message| !message.is_user())
        .map(|message| showcase.chat().render(message))
        .unwrap_or_default()
        .into_iter()
        .filter(|segment| segment.case_id().is_some())
        .collect();

    let Some(reference) = pick(&references, index) else {
        warn(&format!("No reference #{index} in the last reply"));
        return;
    };
    match showcase.activate_reference(reference).await {
        Some(case) => print_case_detail(&case),
        None => warn(&format!(
            "Case #{} is not in the showcase",
            reference.case_id().unwrap_or_default()
        )),
    }
}

fn publish(showcase: &ShowcaseUseCase, args: &str) {
    let mut parts = args.splitn(3, ' ');
    let (Some(role), Some(industry), Some(title)) = (parts.next(), parts.next(), parts.next())
    else {
        warn("Usage: /publish <role> <industry> <title>");
        return;
    };

    let role: Role = match role.parse() {
        Ok(role) => role,
        Err(_) => return warn(&format!("Unknown role '{role}'")),
    };
    let industry: Industry = match industry.parse() {
        Ok(industry) => industry,
        Err(_) => return warn(&format!("Unknown industry '{industry}'")),
    };
    if title.trim().is_empty() {
        return warn("A title is required");
    }

    let case = showcase.publish(CaseDraft::new(title.trim(), role, industry));
    println!("{}", "Published:".bright_green());
    print_case_row(&case);
}

fn print_message(showcase: &ShowcaseUseCase, message: &ChatMessage) {
    if message.is_user() {
        println!("{}", format!("> {}", message.content).green());
        return;
    }

    let mut rendered = String::new();
    for segment in showcase.chat().render(message) {
        match segment {
            Segment::Text(text) => rendered.push_str(&text.bright_blue().to_string()),
            Segment::CaseReference { case_id, label } => rendered.push_str(
                &format!("[{} #{}]", label.text(), case_id)
                    .yellow()
                    .underline()
                    .to_string(),
            ),
        }
    }
    println!("{rendered}");
    println!();
}

fn print_framework(framework: &PendingFramework) {
    println!("{}", "┌─ 技術框架建議".bright_yellow().bold());
    for line in framework.body.lines() {
        println!("{} {}", "│".bright_yellow(), line);
    }
    println!(
        "{}",
        format!("└─ /send {}", framework.action_label()).bright_yellow()
    );
    println!();
}

fn print_quick_replies(quick_replies: &[QuickReply]) {
    for (index, quick) in quick_replies.iter().enumerate() {
        println!(
            "{} {}",
            format!("/quick {}", index + 1).bright_cyan(),
            quick.label.bright_black()
        );
    }
    println!();
}

fn print_help() {
    let rows = [
        ("/quick [n]", "list or send a suggested question"),
        ("/send", "submit the current framework to a consultant"),
        ("/open <id>", "show a case"),
        ("/ref <n>", "open the n-th case referenced in the last reply"),
        ("/cases", "list cases matching the gallery filter"),
        ("/role <role|All>", "filter by role"),
        ("/industry <industry|All>", "filter by industry"),
        ("/search [text]", "filter by text"),
        ("/publish <role> <industry> <title>", "add a case"),
        ("/close", "close the case view"),
        ("/exit", "leave"),
    ];
    for (command, description) in rows {
        println!("{} {}", command.bright_cyan(), description.bright_black());
    }
}

/// Picks the 1-based `index`-th item.
fn pick<'a, T>(items: &'a [T], index: &str) -> Option<&'a T> {
    let position: usize = index.trim().parse().ok()?;
    position.checked_sub(1).and_then(|i| items.get(i))
}

fn warn(message: &str) {
    println!("{}", message.yellow());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_text_is_message() {
        assert_eq!(ReplInput::parse("我想了解 RAG"), ReplInput::Message("我想了解 RAG"));
    }

    #[test]
    fn test_parse_commands_with_arguments() {
        assert_eq!(ReplInput::parse("/quick"), ReplInput::Quick(None));
        assert_eq!(ReplInput::parse("/quick 2"), ReplInput::Quick(Some("2")));
        assert_eq!(ReplInput::parse("/open 5"), ReplInput::Open("5"));
        assert_eq!(
            ReplInput::parse("/publish DataInsight Retail 門市需求預測"),
            ReplInput::Publish("DataInsight Retail 門市需求預測")
        );
        assert_eq!(ReplInput::parse("/nope"), ReplInput::Unknown("/nope"));
    }

    #[test]
    fn test_pick_is_one_based() {
        let items = ["a", "b"];
        assert_eq!(pick(&items, "1"), Some(&"a"));
        assert_eq!(pick(&items, "2"), Some(&"b"));
        assert_eq!(pick(&items, "0"), None);
        assert_eq!(pick(&items, "x"), None);
    }

    #[test]
    fn test_hint_completes_command_prefix() {
        let helper = CliHelper::new();
        let history = rustyline::history::DefaultHistory::new();
        let ctx = Context::new(&history);
        assert_eq!(helper.hint("/pu", 3, &ctx), Some("blish".to_string()));
        assert_eq!(helper.hint("/publish x", 10, &ctx), None);
        assert_eq!(helper.hint("hello", 5, &ctx), None);
    }
}
