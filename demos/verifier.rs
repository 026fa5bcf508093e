use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, LineWriter, Write};

use senryu_rs::{
    strip_hashtags, Configuration, Lexicon, LexiconAnalyzer, Matcher, Opt, YamlConfiguration,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    // simple command line interface: <config.yaml> <input> <output>
    let args: Vec<_> = std::env::args().collect();
    if args.len() != 4 {
        return Err("usage: verifier <config.yaml> <input file> <output file>".into());
    }
    let cfg = YamlConfiguration::load(&args[1])?;
    let lexicon = match cfg.get_lexicon() {
        Some(path) => Lexicon::load(path)?,
        None => Lexicon::default(),
    };
    let matcher = Matcher::new(LexiconAnalyzer::new(lexicon));
    let opt = Opt::from_config(&cfg);

    let lines = io::BufReader::new(File::open(&args[2])?).lines();
    let mut opts = OpenOptions::new();
    opts.create(true).write(true).truncate(true);
    let mut writer = LineWriter::new(opts.open(&args[3])?);

    for line in lines {
        let line = line?;
        let found = matcher.find_with_opt(&strip_hashtags(&line), cfg.get_rule(), &opt)?;
        writeln!(writer, "{}", found.join(","))?;
    }
    writer.flush()?;
    Ok(())
}
