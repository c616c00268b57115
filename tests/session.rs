use std::{future::Future, time::Duration};

use ricecooker::{
    console::{
        self, ConsoleConfig, SessionEnd,
        menu::{FAREWELL, PROMPT, render_menu},
    },
    shutdown::{Interrupt, InterruptError},
};
use tokio::{
    io::{AsyncWriteExt, BufReader, DuplexStream},
    time::sleep,
};

// ─── Helpers ────────────────────────────────────────────────────────────────

fn quiet() -> ConsoleConfig {
    ConsoleConfig { show_menu: false }
}

fn never_interrupted() -> impl Future<Output = Result<Interrupt, InterruptError>> {
    std::future::pending()
}

async fn run_script(config: ConsoleConfig, script: &str) -> (SessionEnd, String) {
    let mut output = Vec::new();
    let end = console::run(config, script.as_bytes(), &mut output, never_interrupted())
        .await
        .expect("session over in-memory pipes");
    (end, String::from_utf8(output).expect("utf-8 output"))
}

/// Expected transcript with the menu hidden. Each reply answers one operator
/// line and is followed by a fresh prompt; completion notices are not.
fn transcript(replies: &[&str]) -> String {
    let mut out = String::from(PROMPT);
    for reply in replies {
        out.push_str(reply);
        out.push('\n');
        if !reply.starts_with("Rice is") {
            out.push_str(PROMPT);
        }
    }
    out.push_str(FAREWELL);
    out.push('\n');
    out
}

async fn send(tx: &mut DuplexStream, line: &str) {
    tx.write_all(line.as_bytes())
        .await
        .expect("write operator line");
}

// ─── Menu plumbing ──────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn exit_prints_menu_prompt_and_farewell() {
    let (end, output) = run_script(ConsoleConfig::default(), "7\n").await;

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(output, format!("{}{PROMPT}{FAREWELL}\n", render_menu()));
}

#[tokio::test(start_paused = true)]
async fn end_of_input_ends_the_session() {
    let (end, output) = run_script(quiet(), "").await;

    assert_eq!(end, SessionEnd::InputClosed);
    assert_eq!(output, format!("{PROMPT}{FAREWELL}\n"));
}

#[tokio::test(start_paused = true)]
async fn bad_input_is_reported_and_the_loop_continues() {
    let (end, output) = run_script(quiet(), "abc\n9\n0\n\n3\n7\n").await;

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(
        output,
        transcript(&[
            "Invalid input. Please enter a number.",
            "Invalid command. Please enter a valid option.",
            "Invalid command. Please enter a valid option.",
            "Invalid input. Please enter a number.",
            "Nothing to cancel.",
        ])
    );
}

#[tokio::test(start_paused = true)]
async fn undecodable_input_is_reported_as_not_a_number() {
    let mut output = Vec::new();
    let end = console::run(
        quiet(),
        &b"\xff\xfe\n4\n7\n"[..],
        &mut output,
        never_interrupted(),
    )
    .await
    .expect("session survives undecodable input");

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(
        String::from_utf8(output).expect("utf-8 output"),
        transcript(&[
            "Invalid input. Please enter a number.",
            "Water added successfully.",
        ])
    );
}

// ─── Preconditions ──────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn cooking_while_unplugged_fails_with_102() {
    let (_, output) = run_script(quiet(), "6\n1\n5\n1\n7\n").await;

    assert_eq!(
        output,
        transcript(&[
            "Rice cooker unplugged.",
            "Error: 102 - Rice cooker is not plugged in.",
            "Rice cooker plugged in.",
            "Cooking rice...",
        ])
    );
}

#[tokio::test(start_paused = true)]
async fn unplugging_while_cooking_fails_with_103() {
    let (_, output) = run_script(quiet(), "1\n6\n1\n4\n7\n").await;

    assert_eq!(
        output,
        transcript(&[
            "Cooking rice...",
            "Error: 103 - Rice cooker is busy. Please wait until it finishes before unplugging.",
            "Rice cooker is already busy.",
            "Water added successfully.",
        ])
    );
}

// ─── Timed completions ──────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn cooking_completes_after_three_seconds() {
    let (mut tx, rx) = tokio::io::duplex(256);
    let mut output = Vec::new();

    let operator = async move {
        send(&mut tx, "1\n").await;
        sleep(Duration::from_millis(2900)).await;
        send(&mut tx, "6\n").await;
        sleep(Duration::from_millis(200)).await;
        send(&mut tx, "6\n").await;
        send(&mut tx, "7\n").await;
    };
    let (end, ()) = tokio::join!(
        console::run(quiet(), BufReader::new(rx), &mut output, never_interrupted()),
        operator,
    );

    assert_eq!(end.expect("session"), SessionEnd::Exit);
    assert_eq!(
        String::from_utf8(output).expect("utf-8 output"),
        transcript(&[
            "Cooking rice...",
            "Error: 103 - Rice cooker is busy. Please wait until it finishes before unplugging.",
            "Rice is cooked!",
            "Rice cooker unplugged.",
        ])
    );
}

#[tokio::test(start_paused = true)]
async fn canceled_cycle_does_not_end_the_next_one() {
    let (mut tx, rx) = tokio::io::duplex(256);
    let mut output = Vec::new();

    let operator = async move {
        send(&mut tx, "1\n").await;
        sleep(Duration::from_secs(1)).await;
        send(&mut tx, "3\n1\n").await;
        // The canceled cycle would have completed at 3s; the new one ends at 4s.
        sleep(Duration::from_millis(2500)).await;
        send(&mut tx, "2\n").await;
        sleep(Duration::from_secs(1)).await;
        send(&mut tx, "7\n").await;
    };
    let (end, ()) = tokio::join!(
        console::run(quiet(), BufReader::new(rx), &mut output, never_interrupted()),
        operator,
    );

    assert_eq!(end.expect("session"), SessionEnd::Exit);
    assert_eq!(
        String::from_utf8(output).expect("utf-8 output"),
        transcript(&[
            "Cooking rice...",
            "Canceling operation...\nOperation canceled.",
            "Cooking rice...",
            "Rice cooker is not ready for warming.",
            "Rice is cooked!",
        ])
    );
}

#[tokio::test(start_paused = true)]
async fn rewarming_restarts_the_warm_timer() {
    let (mut tx, rx) = tokio::io::duplex(256);
    let mut output = Vec::new();

    let operator = async move {
        send(&mut tx, "2\n").await;
        sleep(Duration::from_millis(500)).await;
        send(&mut tx, "2\n").await;
        // Past the first warm's deadline, before the second one's.
        sleep(Duration::from_millis(700)).await;
        send(&mut tx, "6\n").await;
        sleep(Duration::from_secs(2)).await;
        send(&mut tx, "7\n").await;
    };
    let (end, ()) = tokio::join!(
        console::run(quiet(), BufReader::new(rx), &mut output, never_interrupted()),
        operator,
    );

    assert_eq!(end.expect("session"), SessionEnd::Exit);
    let output = String::from_utf8(output).expect("utf-8 output");
    assert_eq!(
        output,
        transcript(&[
            "Warming rice...",
            "Warming rice...",
            "Error: 103 - Rice cooker is busy. Please wait until it finishes before unplugging.",
            "Rice is warm and ready to serve!",
        ])
    );
    assert_eq!(output.matches("Rice is warm").count(), 1);
}

// ─── Interrupts ─────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn interrupt_ends_the_session() {
    let (_tx, rx) = tokio::io::duplex(64);
    let mut output = Vec::new();

    let end = console::run(quiet(), BufReader::new(rx), &mut output, async {
        Ok::<_, InterruptError>(Interrupt::CtrlC)
    })
    .await
    .expect("session");

    assert_eq!(end, SessionEnd::Interrupted(Interrupt::CtrlC));
    assert_eq!(
        String::from_utf8(output).expect("utf-8 output"),
        format!("{PROMPT}{FAREWELL}\n")
    );
}

#[tokio::test(start_paused = true)]
async fn failed_interrupt_listener_keeps_the_session_running() {
    let mut output = Vec::new();

    let end = console::run(quiet(), "4\n7\n".as_bytes(), &mut output, async {
        Err::<Interrupt, _>(InterruptError::CtrlC(std::io::Error::other(
            "no signal support",
        )))
    })
    .await
    .expect("session");

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(
        String::from_utf8(output).expect("utf-8 output"),
        transcript(&["Water added successfully."])
    );
}
