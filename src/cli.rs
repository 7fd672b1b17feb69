// src/cli.rs
//
// Terminal front-end over the same Controller the GUI uses.

use std::{
    env,
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use crate::{
    catalog::find_state,
    config::{
        consts::{CONFIG_FILE, DEFAULT_EXPORT_FILE},
        file as config_file,
    },
    controller::{Controller, Notifier},
    filter::FilterView,
    handoff::{Handoff, HandoffPage},
    render::{profile_view, results_view, ResultsView, NO_PROFILE, NO_RESULTS},
    store::{FileKv, KeyValue},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileArgs {
    pub name: Option<String>,
    pub state: Option<String>,
    pub mobile: Option<String>,
    pub course: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Show,
    Search { state: String, course: String },
    Upload(PathBuf),
    Profile,
    ProfileSet(ProfileArgs),
    Download(Option<String>),
    Reset,
    HandoffNext { page: HandoffPage, fields: Handoff },
    HandoffResults(String),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub store_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub html: bool,
    pub yes: bool,
    pub command: Command,
}

type BoxResult<T> = Result<T, Box<dyn Error>>;

pub fn run() -> BoxResult<()> {
    let args = parse_args(env::args().skip(1))?;
    if args.command == Command::Help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    let cfg_path = args.config.clone().unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let mut cfg = config_file::load(&cfg_path);
    if let Some(dir) = &args.store_dir {
        cfg.options.store_dir = dir.clone();
    }
    crate::log::init(&cfg.options.store_dir);
    logf!("CLI: {:?}", args.command);

    let mut ctl = Controller::new(FileKv::new(cfg.options.store_dir.clone()), cfg.options.limits);
    ctl.init();
    let mut n = TermNotifier { assume_yes: args.yes };

    match args.command {
        Command::Help => {}
        Command::Show => {
            ctl.show_all();
            print_results(ctl.results(), args.html);
        }
        Command::Search { state, course } => {
            ctl.search.state = state;
            ctl.search.course = course;
            ctl.search();
            print_results(ctl.results(), args.html);
        }
        Command::Upload(path) => {
            if !ctl.upload_path(&path, &mut n) {
                return Err(format!("Upload of {} was not applied", path.display()).into());
            }
            print_results(ctl.results(), args.html);
        }
        Command::Profile => print_profile(&ctl, args.html),
        Command::ProfileSet(p) => set_profile(&mut ctl, p, &mut n)?,
        Command::Download(out) => {
            let path = match out {
                Some(o) => crate::file::resolve_single_out_path(&o, DEFAULT_EXPORT_FILE)?,
                None => cfg.options.export.out_path(),
            };
            let written = ctl.download(&path)?;
            println!("Wrote {}", written.display());
        }
        Command::Reset => {
            ctl.reset(&mut n);
        }
        Command::HandoffNext { page, fields } => match fields.next_url(page) {
            Ok(url) => println!("{url}"),
            Err(errors) => {
                for e in &errors {
                    eprintln!("{e}");
                }
                return Err(format!("{} field(s) need attention", errors.len()).into());
            }
        },
        Command::HandoffResults(address) => {
            let h = Handoff::from_query(&address);
            let view = FilterView::new(ctl.store().colleges(), &h.query());
            print_profile_view(&profile_view(Some(&h.to_profile())), args.html);
            print_results(&results_view(&view.to_owned_records(), usize::MAX), args.html);
        }
    }
    Ok(())
}

fn set_profile<K: KeyValue>(
    ctl: &mut Controller<K>,
    p: ProfileArgs,
    n: &mut dyn Notifier,
) -> BoxResult<()> {
    // Start from what is saved so partial updates keep the other fields.
    if let Some(u) = ctl.user() {
        ctl.form = crate::controller::ProfileForm::from_profile(&u);
    }
    if let Some(v) = p.name { ctl.form.name = v; }
    if let Some(v) = p.state {
        ctl.form.state = find_state(&v).map(String::from).unwrap_or(v);
    }
    if let Some(v) = p.mobile { ctl.form.mobile = v; }
    if let Some(v) = p.course { ctl.form.course = v; }

    if ctl.submit_profile(n) {
        print_profile(ctl, false);
        Ok(())
    } else {
        for e in &ctl.form_errors {
            eprintln!("{e}");
        }
        Err("Profile not saved".into())
    }
}

/* ---------------- argument parsing ---------------- */

pub fn parse_args<I: IntoIterator<Item = String>>(it: I) -> BoxResult<CliArgs> {
    let mut store_dir = None;
    let mut config = None;
    let mut html = false;
    let mut yes = false;
    let mut words: Vec<String> = Vec::new();
    let mut profile = ProfileArgs::default();
    let mut handoff = Handoff::default();
    let mut page: Option<HandoffPage> = None;
    let mut results: Option<String> = None;
    let mut state = None;
    let mut course = None;
    let mut out = None;

    let mut args = it.into_iter();
    while let Some(a) = args.next() {
        let mut value = |flag: &str| -> BoxResult<String> {
            args.next().ok_or_else(|| format!("Missing value for {flag}").into())
        };
        match a.as_str() {
            "--store" => store_dir = Some(PathBuf::from(value("--store")?)),
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--html" => html = true,
            "--yes" | "-y" => yes = true,
            "--name" => profile.name = Some(value("--name")?),
            "--mobile" => profile.mobile = Some(value("--mobile")?),
            "--stream" => handoff.stream = value("--stream")?,
            "--state" => state = Some(value("--state")?),
            "--course" => course = Some(value("--course")?),
            "-o" | "--out" => out = Some(value("--out")?),
            "--page" => {
                let v = value("--page")?;
                page = Some(match v.to_ascii_lowercase().as_str() {
                    "details" => HandoffPage::Details,
                    "choice" => HandoffPage::Choice,
                    other => return Err(format!("Unknown page: {}", other).into()),
                });
            }
            "--results" => results = Some(value("--results")?),
            "-h" | "--help" => words.insert(0, s!("help")),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("Unknown arg: {}", flag).into());
            }
            _ => words.push(a),
        }
    }

    let first = words.first().map(String::as_str).unwrap_or("help");
    let command = match first {
        "help" => Command::Help,
        "show" => Command::Show,
        "search" => Command::Search {
            state: state.unwrap_or_default(),
            course: course.unwrap_or_default(),
        },
        "upload" => {
            let file = words.get(1).ok_or("Missing file for upload")?;
            Command::Upload(PathBuf::from(file))
        }
        "profile" => match words.get(1).map(String::as_str) {
            None => Command::Profile,
            Some("set") => {
                profile.state = state;
                profile.course = course;
                Command::ProfileSet(profile)
            }
            Some(other) => return Err(format!("Unknown profile action: {}", other).into()),
        },
        "download" => Command::Download(out),
        "reset" => Command::Reset,
        "handoff" => {
            handoff.name = profile.name.unwrap_or_default();
            handoff.mobile = profile.mobile.unwrap_or_default();
            handoff.state = state.unwrap_or_default();
            handoff.course = course.unwrap_or_default();
            match (results, page) {
                (Some(r), _) => Command::HandoffResults(r),
                (None, Some(p)) => Command::HandoffNext { page: p, fields: handoff },
                (None, None) => return Err("handoff needs --page or --results".into()),
            }
        }
        other => return Err(format!("Unknown command: {}", other).into()),
    };

    Ok(CliArgs { store_dir, config, html, yes, command })
}

/* ---------------- terminal rendering ---------------- */

fn print_results(view: &ResultsView, html: bool) {
    if html {
        print!("{}", view.to_html());
        return;
    }
    println!("{}", view.heading);
    if view.no_results {
        println!("  {}", NO_RESULTS);
        return;
    }
    for c in &view.cards {
        println!();
        println!("  {}", c.name);
        println!("    {}", c.location);
        if !c.courses.is_empty() {
            println!("    Courses: {}", c.courses);
        }
        println!("    Fees: {} · Cutoff: {}", c.fees, c.cutoff);
        match (&c.website, c.contact.is_empty()) {
            (Some(url), false) => println!("    {} · {}", c.contact, url),
            (Some(url), true) => println!("    {}", url),
            (None, false) => println!("    {}", c.contact),
            (None, true) => {}
        }
    }
}

fn print_profile<K: KeyValue>(ctl: &Controller<K>, html: bool) {
    print_profile_view(ctl.profile(), html);
}

fn print_profile_view(view: &crate::render::ProfileView, html: bool) {
    if html {
        print!("{}", view.to_html());
        return;
    }
    println!("{}", view.greeting);
    match &view.saved {
        None => println!("  {}", NO_PROFILE),
        Some(s) => {
            println!("  {}", s.name);
            println!("  {}", s.detail);
            println!("  📱 {}", s.mobile);
        }
    }
}

/// Alerts go to stdout; confirmations read y/N from stdin unless `--yes`.
struct TermNotifier {
    assume_yes: bool,
}

impl Notifier for TermNotifier {
    fn notify(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn confirm(&mut self, msg: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{msg} [y/N] ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
