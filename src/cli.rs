// src/cli.rs
use std::{env, path::PathBuf, thread, time::Duration};

use crate::config::consts::{INTERVAL_MAX_SECS, INTERVAL_MIN_SECS};
use crate::overlay;
use crate::params::Params;
use crate::scrape::{self, BrowserSession};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_args(&mut params, env::args().skip(1))?;

    let mut session: Option<BrowserSession> = None;

    loop {
        let outcome = one_cycle(&mut session, &params);

        if !params.watch {
            return outcome;
        }
        if let Err(e) = outcome {
            // watch mode never gives up; next cycle relaunches
            eprintln!("Error: {e}");
            session = None;
        }
        thread::sleep(Duration::from_secs(params.interval as u64));
    }
}

fn one_cycle(
    session: &mut Option<BrowserSession>,
    params: &Params,
) -> Result<(), Box<dyn std::error::Error>> {
    if session.is_none() {
        eprintln!("Launching browser...");
        *session = Some(BrowserSession::launch()?);
    }
    let browser = session.as_mut().ok_or("Browser session unavailable")?;

    let out_dir = params.out_dir();

    match scrape::fetch_goal(browser, &params.channel) {
        Ok(Some(goal)) => {
            println!("{}", overlay::goal_line(&goal, params.show_percentage));
            let html = overlay::render_goal(&goal, params.show_percentage);
            overlay::write_overlay(&out_dir, &html)?;
            Ok(())
        }
        Ok(None) => {
            let msg = "Failed to scrape data or no 'Plus Goal' widget found.";
            eprintln!("{msg}");
            overlay::write_overlay(&out_dir, &overlay::render_message(msg))?;
            Ok(())
        }
        Err(e) => {
            // degrade like the GUI worker: overlay shows the error,
            // session is torn down for a clean relaunch
            let _ = overlay::write_overlay(&out_dir, &overlay::render_message(&e.to_string()));
            *session = None;
            Err(e)
        }
    }
}

pub fn parse_args<I>(params: &mut Params, mut args: I) -> Result<(), Box<dyn std::error::Error>>
where
    I: Iterator<Item = String>,
{
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-c" | "--channel" => {
                params.channel = args.next().ok_or("Missing value for --channel")?;
            }
            "-i" | "--interval" => {
                let v: u32 = args.next().ok_or("Missing value for --interval")?.parse()?;
                if !(INTERVAL_MIN_SECS..=INTERVAL_MAX_SECS).contains(&v) {
                    return Err(format!(
                        "Interval out of range ({INTERVAL_MIN_SECS}-{INTERVAL_MAX_SECS})"
                    )
                    .into());
                }
                params.interval = v;
            }
            "-o" | "--out" => {
                params.out_dir =
                    Some(PathBuf::from(args.next().ok_or("Missing output directory")?));
            }
            "--no-percent" => params.show_percentage = false,
            "-w" | "--watch" => params.watch = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if params.channel.trim().is_empty() {
        return Err("Missing required --channel".into());
    }

    Ok(())
}
