use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use bazi_rs::{
    ChartConfig, ChartReport, CivilDate, CivilDateTime, Gender, SolarTerm, chart_report,
    element_of, hidden_stems, lunar_report, lunar_to_solar, nayin, polarity_of, solar_term_date,
    ten_god, year_ganzhi,
};

#[derive(Parser)]
#[command(name = "bazi", version, about = "Chinese lunar calendar and Four Pillars CLI")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a solar date to its lunar date
    SolarToLunar {
        /// Solar date (YYYY-MM-DD)
        date: String,
    },
    /// Convert a lunar date to its solar date
    LunarToSolar {
        /// Lunar year (1900-2100)
        year: i32,
        /// Lunar month (1-12)
        month: u8,
        /// Lunar day (1-30)
        day: u8,
        /// The date lies in the leap month
        #[arg(long)]
        leap: bool,
    },
    /// Four Pillars chart of a birth date-time
    Chart {
        /// Local date-time (YYYY-MM-DDThh:mm)
        datetime: String,
        /// Gender of the chart subject
        #[arg(long, value_enum, default_value = "male")]
        gender: GenderArg,
        /// Number of luck pillars (0-60)
        #[arg(long, default_value = "8", value_parser = clap::value_parser!(u8).range(0..=60))]
        luck_steps: u8,
        /// Years per luck pillar (1-120)
        #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..=120))]
        luck_years: u32,
        /// Omit ten-gods of hidden stems
        #[arg(long)]
        no_hidden: bool,
    },
    /// Ganzhi of a calendar year (no Start-of-Spring adjustment)
    Year {
        /// Calendar year (1900-2100)
        year: i32,
    },
    /// Element and polarity of a stem or branch
    Element {
        /// Stem or branch character, e.g. 甲 or 子
        symbol: char,
    },
    /// Ten-god of a stem relative to a day stem
    TenGod {
        /// Day stem
        day: char,
        /// Other stem
        other: char,
    },
    /// Hidden stems of a branch
    Hidden {
        /// Branch character
        branch: char,
    },
    /// Solar-term dates of a year
    SolarTerm {
        /// Calendar year (1900-2100)
        year: i32,
        /// Term index (0 = 小寒 .. 23 = 冬至); all terms if omitted
        index: Option<u8>,
    },
    /// Na Yin of a pillar
    Nayin {
        /// Stem+branch pillar, e.g. 甲子
        pillar: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Serialize)]
struct SolarOut {
    year: i32,
    month: u32,
    day: u32,
}

#[derive(Serialize)]
struct YearOut {
    year: i32,
    ganzhi: String,
}

#[derive(Serialize)]
struct ElementOut {
    symbol: char,
    element: &'static str,
    polarity: &'static str,
}

#[derive(Serialize)]
struct TenGodOut {
    day: char,
    other: char,
    name: &'static str,
    english: &'static str,
}

#[derive(Serialize)]
struct HiddenOut {
    stem: char,
    weight: f64,
}

#[derive(Serialize)]
struct TermOut {
    index: u8,
    name: &'static str,
    date: String,
}

#[derive(Serialize)]
struct NayinOut {
    pillar: String,
    name: &'static str,
    element: &'static str,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let json = cli.json;
    match cli.command {
        Commands::SolarToLunar { date } => {
            let date: CivilDate = date.parse().unwrap_or_else(|e| fail(e));
            let (y, m, d) = date.ymd();
            let report = lunar_report(y, m, d).unwrap_or_else(|e| fail(e));
            if json {
                print_json(&report);
            } else {
                println!(
                    "{} ({}-{:02}-{:02}{})",
                    report.text,
                    report.year,
                    report.month,
                    report.day,
                    if report.is_leap { ", leap" } else { "" }
                );
            }
        }

        Commands::LunarToSolar {
            year,
            month,
            day,
            leap,
        } => {
            let (y, m, d) = lunar_to_solar(year, month, day, leap).unwrap_or_else(|e| fail(e));
            if json {
                print_json(&SolarOut {
                    year: y,
                    month: m,
                    day: d,
                });
            } else {
                println!("{y:04}-{m:02}-{d:02}");
            }
        }

        Commands::Chart {
            datetime,
            gender,
            luck_steps,
            luck_years,
            no_hidden,
        } => {
            let at: CivilDateTime = datetime.parse().unwrap_or_else(|e| fail(e));
            let config = ChartConfig {
                luck_pillar_count: usize::from(luck_steps),
                luck_period_years: luck_years,
                hidden_stem_ten_gods: !no_hidden,
            };
            debug!(%at, ?config, "building chart");
            let (y, m, d) = at.date().ymd();
            let report = chart_report(y, m, d, at.hour(), at.minute(), gender.into(), &config)
                .unwrap_or_else(|e| fail(e));
            if json {
                print_json(&report);
            } else {
                print_chart(&report);
            }
        }

        Commands::Year { year } => {
            let ganzhi = year_ganzhi(year).unwrap_or_else(|e| fail(e));
            if json {
                print_json(&YearOut { year, ganzhi });
            } else {
                println!("{ganzhi}");
            }
        }

        Commands::Element { symbol } => {
            let element = element_of(symbol).unwrap_or_else(|e| fail(e));
            let polarity = polarity_of(symbol).unwrap_or_else(|e| fail(e));
            if json {
                print_json(&ElementOut {
                    symbol,
                    element: element.english_name(),
                    polarity: polarity.english_name(),
                });
            } else {
                println!(
                    "{} ({}), {} ({})",
                    element.english_name(),
                    element.name(),
                    polarity.english_name(),
                    polarity.name()
                );
            }
        }

        Commands::TenGod { day, other } => {
            let god = ten_god(day, other).unwrap_or_else(|e| fail(e));
            if json {
                print_json(&TenGodOut {
                    day,
                    other,
                    name: god.name(),
                    english: god.english_name(),
                });
            } else {
                println!("{} ({})", god.name(), god.english_name());
            }
        }

        Commands::Hidden { branch } => {
            let stems = hidden_stems(branch).unwrap_or_else(|e| fail(e));
            if json {
                let out: Vec<HiddenOut> = stems
                    .into_iter()
                    .map(|(stem, weight)| HiddenOut { stem, weight })
                    .collect();
                print_json(&out);
            } else {
                for (stem, weight) in stems {
                    println!("{stem} {weight:.1}");
                }
            }
        }

        Commands::SolarTerm { year, index } => {
            let indices: Vec<u8> = match index {
                Some(i) => vec![i],
                None => (0..24).collect(),
            };
            let terms: Vec<TermOut> = indices
                .into_iter()
                .map(|i| {
                    let (term, (y, m, d)) = solar_term_date(year, i).unwrap_or_else(|e| fail(e));
                    term_out(term, y, m, d)
                })
                .collect();
            if json {
                print_json(&terms);
            } else {
                for t in &terms {
                    println!("{:>2} {} {}", t.index, t.name, t.date);
                }
            }
        }

        Commands::Nayin { pillar } => {
            let n = nayin(&pillar).unwrap_or_else(|e| fail(e));
            if json {
                print_json(&NayinOut {
                    pillar,
                    name: n.name,
                    element: n.element.english_name(),
                });
            } else {
                println!("{} ({})", n.name, n.element.english_name());
            }
        }
    }
}

fn term_out(term: SolarTerm, year: i32, month: u32, day: u32) -> TermOut {
    TermOut {
        index: term.index(),
        name: term.name(),
        date: format!("{year:04}-{month:02}-{day:02}"),
    }
}

fn print_chart(r: &ChartReport) {
    println!("Birth:      {} ({})", r.birth, r.gender);
    if let Some(lunar) = &r.lunar {
        println!("Lunar:      {}", lunar.text);
    }
    println!("Zodiac:     {}", r.zodiac);
    println!(
        "Pillars:    {} {} {} {}",
        r.pillars.year, r.pillars.month, r.pillars.day, r.pillars.hour
    );
    let nayin: Vec<&str> = r.pillar_details.iter().map(|p| p.nayin).collect();
    println!("Na Yin:     {}", nayin.join(" "));
    println!("Day master: {}", r.day_master);
    println!(
        "Ten gods:   year {}, month {}, hour {}",
        r.ten_gods.year.name, r.ten_gods.month.name, r.ten_gods.hour.name
    );
    let counts: Vec<String> = r
        .elements
        .counts
        .iter()
        .map(|c| format!("{} {:.1}", c.element, c.count))
        .collect();
    println!("Elements:   {} ({})", counts.join(", "), r.elements.balance);
    println!("Strength:   {:.1} ({})", r.strength.score, r.strength.level);
    for h in &r.hidden_ten_gods {
        println!(
            "  hidden {:<5} {} {} ({})",
            h.position, h.stem, h.ten_god.name, h.ten_god.english
        );
    }
    println!("Luck ({}):", r.luck_direction);
    for l in &r.luck_pillars {
        println!("  {:>3}-{:<3} {}", l.start_age, l.end_age, l.ganzhi);
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn fail<E: std::fmt::Display>(e: E) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}
