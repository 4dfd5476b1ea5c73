use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use enigma_bouquet::{build_markers, BouquetItem, BouquetItemMarker, MarkerSpec};

#[derive(Parser)]
#[command(name = "bouquet_marker")]
#[command(about = "生成 Enigma2 书签文件中的分隔标记行")]
#[command(version = "0.1.0")]
struct Cli {
    /// 标记描述（单个标记模式）
    #[arg(short, long)]
    description: Option<String>,

    /// 标记编号（单个标记模式，默认 0）
    #[arg(short, long)]
    number: Option<String>,

    /// 从JSON文件批量读取标记
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 从标准输入读取JSON标记数组
    #[arg(long)]
    stdin: bool,

    /// 为缺少编号的标记自动编号的起始值
    #[arg(long)]
    start_number: Option<u32>,

    /// 输出JSON而不是书签行
    #[arg(long)]
    json: bool,

    /// 静默模式(仅输出错误)
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    validate_sources(&cli)?;

    let markers = if let Some(input) = &cli.input {
        handle_file_input(&cli, input)?
    } else if cli.stdin {
        handle_stdin_input(&cli)?
    } else {
        handle_single_marker(&cli)?
    };

    print_markers(&cli, &markers)
}

/// 初始化日志（RUST_LOG 优先）
fn init_logging(quiet: bool) {
    let default_filter = if quiet { "error" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// 验证输入来源（确保只使用一种方式）
fn validate_sources(cli: &Cli) -> anyhow::Result<()> {
    let source_count = [
        cli.description.is_some(),
        cli.input.is_some(),
        cli.stdin,
    ]
    .iter()
    .filter(|&&x| x)
    .count();

    if source_count == 0 {
        bail!("必须指定一种输入方式：--description、--input 或 --stdin");
    }
    if source_count > 1 {
        bail!("只能使用一种输入方式：--description、--input 或 --stdin");
    }
    if cli.number.is_some() && cli.description.is_none() {
        bail!("--number 只能与 --description 一起使用");
    }
    if cli.start_number.is_some() && cli.description.is_some() {
        bail!("--start-number 只能与 --input 或 --stdin 一起使用");
    }

    Ok(())
}

/// 处理单个标记
fn handle_single_marker(cli: &Cli) -> anyhow::Result<Vec<BouquetItemMarker>> {
    let marker = BouquetItemMarker::new(cli.description.as_deref(), cli.number.as_deref())
        .context("创建标记失败")?;
    Ok(vec![marker])
}

/// 处理JSON文件输入
fn handle_file_input(cli: &Cli, input: &PathBuf) -> anyhow::Result<Vec<BouquetItemMarker>> {
    if !input.exists() {
        bail!("输入文件不存在: {:?}", input);
    }

    let specs = MarkerSpec::load_list(input)
        .with_context(|| format!("读取标记文件失败: {:?}", input))?;
    log::info!("从 {:?} 读取了 {} 条标记", input, specs.len());

    build_markers(&specs, cli.start_number).context("创建标记失败")
}

/// 处理标准输入
fn handle_stdin_input(cli: &Cli) -> anyhow::Result<Vec<BouquetItemMarker>> {
    if !cli.quiet {
        eprintln!("等待从标准输入读取JSON数据... (Ctrl+D结束输入)");
    }

    use std::io::Read;
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("从标准输入读取失败")?;

    let specs = MarkerSpec::parse_list(&buffer).context("解析标记JSON失败")?;
    build_markers(&specs, cli.start_number).context("创建标记失败")
}

/// 输出结果
fn print_markers(cli: &Cli, markers: &[BouquetItemMarker]) -> anyhow::Result<()> {
    if cli.json {
        let json = serde_json::to_string_pretty(markers).context("序列化标记失败")?;
        println!("{}", json);
        return Ok(());
    }

    for marker in markers {
        println!("{}", marker.to_line());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bouquet_marker").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_validate_single_marker() {
        assert!(validate_sources(&parse(&["-d", "Sports", "-n", "5"])).is_ok());
    }

    #[test]
    fn test_validate_requires_one_source() {
        assert!(validate_sources(&parse(&[])).is_err());
        assert!(validate_sources(&parse(&["-d", "Sports", "--stdin"])).is_err());
    }

    #[test]
    fn test_validate_number_requires_description() {
        assert!(validate_sources(&parse(&["--stdin", "-n", "5"])).is_err());
    }

    #[test]
    fn test_validate_start_number_rejected_with_description() {
        assert!(validate_sources(&parse(&["-d", "Sports", "--start-number", "1"])).is_err());
        assert!(validate_sources(&parse(&["--stdin", "--start-number", "1"])).is_ok());
    }
}
