// src/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, ValueHint};

use crate::options::{OutputFormat, SortKey};

#[derive(Parser, Debug)]
#[command(
    name = "char_stats",
    version,
    about = "テキストファイルの文字出現頻度を集計するツール",
    group(
        clap::ArgGroup::new("query_mode")
            .args(&["query", "most_frequent"])
            .multiple(false)
    )
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub query: QueryOptions,

    #[command(flatten)]
    pub input: InputOptions,

    /// 対象ソース名
    #[arg(value_hint = ValueHint::FilePath, required = true, help_heading = "走査/入力")]
    pub names: Vec<String>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// ソートキー
    #[arg(long, value_enum, default_value = "count", help_heading = "出力")]
    pub sort: SortKey,

    /// 降順ソート
    #[arg(long, help_heading = "出力")]
    pub desc: bool,

    /// 上位N件のみ表示
    #[arg(long, help_heading = "出力")]
    pub top: Option<usize>,

    /// 出力先ファイル（省略時は標準出力）
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct QueryOptions {
    /// 特定の1文字の出現回数のみ表示
    #[arg(long, help_heading = "クエリ")]
    pub query: Option<char>,

    /// 最頻出文字のみ表示
    #[arg(long, help_heading = "クエリ")]
    pub most_frequent: bool,
}

#[derive(ClapArgs, Debug)]
pub struct InputOptions {
    /// ソース名の解決ルート
    #[arg(long, default_value = ".", value_hint = ValueHint::DirPath, help_heading = "走査/入力")]
    pub root: PathBuf,

    /// 最初の失敗で中断
    #[arg(long, help_heading = "走査/入力")]
    pub strict: bool,
}
