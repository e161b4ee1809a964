//! HTML Components CLI
//!
//! Usage:
//!   html-components [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>      Library configuration (TOML format)
//!   -u, --user <ROLE>        anonymous, member, staff or superuser
//!   -D, --define <KEY=VALUE> Template variable, repeatable
//!   -r, --reference          Show directive reference
//!   -v, --verbose            Debug logging on stderr
//!   -h, --help               Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use html_components::{
    render_with_config, ComponentConfig, RenderConfig, RenderError, User,
};

#[derive(Parser)]
#[command(name = "html-components")]
#[command(about = "Render page templates built from reusable HTML components")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Library configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Who the page is rendered for
    #[arg(short, long, value_enum, default_value_t = Role::Anonymous)]
    user: Role,

    /// Template variable as KEY=VALUE
    #[arg(short = 'D', long = "define", value_parser = parse_define)]
    defines: Vec<(String, String)>,

    /// Show directive reference
    #[arg(short, long)]
    reference: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Role {
    Anonymous,
    Member,
    Staff,
    Superuser,
}

impl From<Role> for User {
    fn from(role: Role) -> Self {
        match role {
            Role::Anonymous => User::anonymous(),
            Role::Member => User::member(),
            Role::Staff => User::staff(),
            Role::Superuser => User::superuser(),
        }
    }
}

fn parse_define(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if cli.reference {
        print_reference();
        return;
    }

    // Load configuration
    let components = match &cli.config {
        Some(path) => match ComponentConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ComponentConfig::default(),
    };

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let config = cli.defines.into_iter().fold(
        RenderConfig::new()
            .with_components(components)
            .with_user(cli.user.into()),
        |config, (name, value)| config.with_variable(name, value),
    );

    match render_with_config(&source, config) {
        Ok(html) => {
            println!("{}", html);
        }
        Err(RenderError::Parse(errors)) => {
            for error in &errors {
                eprint!("{}", error.format(&source, &filename));
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_reference() {
    println!(
        r#"HTML COMPONENTS DIRECTIVES
==========================

Block directives end with {{% end<name> %}}. Names are case-insensitive.

NAVIGATION
    {{% navbar %}} ... {{% endnavbar %}}
    {{% navlink href=/about class=active %}}About{{% endnavlink %}}
    {{% navlogo href=/ %}}Shop{{% endnavlogo %}}
    {{% navbutton href=/join secondary %}}Join{{% endnavbutton %}}
    {{% navuser icons %}}                log in/sign up or profile/log out
    {{% navadmin icons %}}               staff and superusers only

FOOTER
    {{% footer %}} ... {{% endfooter %}}
    {{% footerlogo class=big %}}Brand{{% endfooterlogo %}}
    {{% footersocial %}}{{% twitter https://... %}}{{% endfootersocial %}}
    {{% footerlink href=/faq class=small %}}FAQ{{% endfooterlink %}}
    {{% footerrights %}}(c) 2024{{% endfooterrights %}}

NEWSLETTER
    {{% newslettersignup %}}
        {{% newslettertitle %}}Stay updated{{% endnewslettertitle %}}
        {{% newsletterdesc %}}Weekly news{{% endnewsletterdesc %}}
    {{% endnewslettersignup %}}

PRODUCT CARD
    {{% productcard %}}
        {{% productname "Lamp" %}}
        {{% productdesc %}}Bright{{% endproductdesc %}}
        {{% productvariants %}}{{% productvariant red img/red.png active %}}{{% endproductvariants %}}
        {{% productprice 49.99 $ %}}
    {{% endproductcard %}}

ICONS AND ASSETS
    {{% icon bars %}}
    {{% facebook URL %}} {{% twitter URL %}} {{% instagram URL %}} {{% youtube URL %}} {{% linkedin URL %}}
    {{% svg img/logo.svg static=true width=200 height=0 %}}
    {{% static css/site.css %}}

SCRIPTS
    {{% registerapi https://... Secure SameSite=None %}}
    {{% registerscript js/app.js %}}
    {{% loadapis %}}                     once, at the end of <body>

VARIABLES AND COMMENTS
    {{{{ name }}}}                         escaped, set with -D name=value
    {{# ignored #}}"#
    );
}
