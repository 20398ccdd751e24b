use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use suggest::{DomAdapter, HeadlessDom, Key, Options, Suggest};

/// Query a suggestion endpoint from the command line.
///
/// Drives the widget against the in-memory DOM adapter: types the term one
/// keystroke at a time, prints the suggestions the endpoint returns, and
/// optionally picks one to fetch its details payload.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// URL of the suggestion endpoint
    #[arg(short, long)]
    endpoint: String,

    /// Term to type into the input
    term: String,

    /// Pick the Nth suggestion (0-based) and print its details payload
    #[arg(short, long)]
    pick: Option<usize>,

    /// POST key carrying the term
    #[arg(long, default_value = "find")]
    post_key: String,

    /// Value of the `type` field for the details request
    #[arg(long, default_value = "details")]
    details_key: String,

    /// How long to wait for a reply, in milliseconds
    #[arg(long, default_value_t = 3000)]
    timeout_ms: u64,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let cli = Cli::parse();
    let timeout = Duration::from_millis(cli.timeout_ms);

    let details = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&details);

    let mut options = Options::default();
    options.behavior.suggestions_post_key = cli.post_key;
    options.behavior.details_post_key = cli.details_key;
    options.core.output = Some(Box::new(move |payload| {
        *sink.borrow_mut() = Some(payload);
    }));

    let dom = HeadlessDom::new("search");
    let mut widget = Suggest::attach("search", &cli.endpoint, options, dom)?;

    // Type the term the way a user would, one keystroke at a time
    let mut typed = String::new();
    for ch in cli.term.chars() {
        typed.push(ch);
        widget.dom_mut().set_input_value(&typed);
        widget.handle_key(Key::Other);
    }

    pump(&mut widget, timeout, |w| w.dom().results_visible())
        .ok_or_else(|| eyre!("no reply from {} within {timeout:?}", cli.endpoint))?;

    let lines = widget.dom().rendered_lines().to_vec();
    if lines.is_empty() {
        if let Some(message) = widget.dom().no_matches_message() {
            println!("{message}");
        }
        return Ok(());
    }
    for line in &lines {
        println!("{}", line.html);
    }

    let Some(pick) = cli.pick else {
        return Ok(());
    };
    if pick >= lines.len() {
        return Err(eyre!("--pick {pick} is out of range ({} results)", lines.len()));
    }

    widget.handle_line_click(pick);
    pump(&mut widget, timeout, |w| {
        details.borrow().is_some()
            || w.session().details_id.is_none()
    })
    .ok_or_else(|| eyre!("no details reply within {timeout:?}"))?;

    match details.borrow_mut().take() {
        Some(payload) => println!("{}", serde_json::to_string_pretty(&payload)?),
        None => return Err(eyre!("details request was not sent; nothing was committed")),
    }
    Ok(())
}

/// Tick the widget until `done` holds or the timeout passes.
fn pump<F>(
    widget: &mut Suggest<HeadlessDom, suggest::HttpTransport>,
    timeout: Duration,
    done: F,
) -> Option<()>
where
    F: Fn(&Suggest<HeadlessDom, suggest::HttpTransport>) -> bool,
{
    let deadline = Instant::now() + timeout;
    loop {
        widget.tick();
        if done(widget) {
            return Some(());
        }
        if Instant::now() >= deadline {
            return None;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}
