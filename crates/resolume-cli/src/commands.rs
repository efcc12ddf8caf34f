use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use resolume_client::types::{Clip, Column, Deck, Layer, LayerGroup, ResetParameter};
use resolume_client::{Address, CancellationToken, Entity, EntityKind, HistoryAction, ResolumeClient};
use serde::Serialize;

use crate::target::{Kind, parse_address};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show product name and version
    Product,
    /// List available video effects
    Effects,
    /// List available video sources
    Sources,
    /// Dump the whole composition as JSON
    Composition,
    /// Dump one deck, layer, group, column or clip as JSON
    Get {
        kind: Kind,
        #[arg(value_parser = parse_address)]
        address: Address,
    },
    /// Select an entity in the application
    Select {
        kind: Kind,
        #[arg(value_parser = parse_address)]
        address: Address,
    },
    /// Connect, disconnect or toggle a column or clip
    Connect {
        kind: Kind,
        #[arg(value_parser = parse_address)]
        address: Address,
        /// Force connected
        #[arg(long, conflicts_with = "off")]
        on: bool,
        /// Force disconnected
        #[arg(long)]
        off: bool,
    },
    /// Clear a layer or unload a clip
    Clear {
        kind: Kind,
        #[arg(value_parser = parse_address)]
        address: Address,
    },
    /// Add a deck, layer, group or column
    Add {
        kind: Kind,
        /// Insert before this entity (object URI)
        #[arg(long)]
        before: Option<String>,
    },
    /// Load a file or source into a clip
    Open {
        #[arg(value_parser = parse_address)]
        clip: Address,
        uri: String,
    },
    /// Undo the last change
    Undo,
    /// Redo the last undone change
    Redo,
    /// Disconnect every playing clip
    DisconnectAll,
    /// Read or reset a parameter by id
    #[command(subcommand)]
    Param(ParamCommand),
    /// Download, upload or reset clip thumbnails
    #[command(subcommand)]
    Thumbnail(ThumbnailCommand),
}

#[derive(Subcommand, Debug)]
pub enum ParamCommand {
    /// Print a parameter by id
    Get { id: i64 },
    /// Reset a parameter by id to its default
    Reset {
        id: i64,
        /// Also clear its animation
        #[arg(long)]
        animation: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ThumbnailCommand {
    /// Save the thumbnail of a clip (or the dummy image with no clip)
    Get {
        #[arg(value_parser = parse_address)]
        clip: Option<Address>,
        #[arg(long, short)]
        out: PathBuf,
    },
    /// Upload a custom thumbnail image
    Set {
        #[arg(value_parser = parse_address)]
        clip: Address,
        image: PathBuf,
    },
    /// Restore the default thumbnail
    Reset {
        #[arg(value_parser = parse_address)]
        clip: Address,
    },
}

pub async fn run(client: &ResolumeClient, command: Command, cancel: &CancellationToken) -> Result<()> {
    match command {
        Command::Product => {
            let product = client.product(cancel).await.context("get product")?;
            println!("{product}");
        }
        Command::Effects => print_json(&client.effects(cancel).await.context("list effects")?)?,
        Command::Sources => print_json(&client.sources(cancel).await.context("list sources")?)?,
        Command::Composition => {
            print_json(&client.composition(cancel).await.context("get composition")?)?
        }
        Command::Get { kind, address } => match EntityKind::from(kind) {
            EntityKind::Deck => print_entity::<Deck>(client, address, cancel).await?,
            EntityKind::Layer => print_entity::<Layer>(client, address, cancel).await?,
            EntityKind::LayerGroup => print_entity::<LayerGroup>(client, address, cancel).await?,
            EntityKind::Column => print_entity::<Column>(client, address, cancel).await?,
            EntityKind::Clip => print_entity::<Clip>(client, address, cancel).await?,
        },
        Command::Select { kind, address } => client
            .select(kind.into(), address, cancel)
            .await
            .with_context(|| format!("select {kind:?} {address}"))?,
        Command::Connect {
            kind,
            address,
            on,
            off,
        } => {
            let state = match (on, off) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            client
                .connect(kind.into(), address, state, cancel)
                .await
                .with_context(|| format!("connect {kind:?} {address}"))?
        }
        Command::Clear { kind, address } => client
            .clear(kind.into(), address, cancel)
            .await
            .with_context(|| format!("clear {kind:?} {address}"))?,
        Command::Add { kind, before } => client
            .add(kind.into(), before.as_deref(), cancel)
            .await
            .with_context(|| format!("add {kind:?}"))?,
        Command::Open { clip, uri } => client
            .open_clip(clip, &uri, cancel)
            .await
            .with_context(|| format!("open {uri} into clip {clip}"))?,
        Command::Undo => client.history(HistoryAction::Undo, cancel).await.context("undo")?,
        Command::Redo => client.history(HistoryAction::Redo, cancel).await.context("redo")?,
        Command::DisconnectAll => client.disconnect_all(cancel).await.context("disconnect all")?,
        Command::Param(ParamCommand::Get { id }) => {
            let param = client
                .parameter(id, cancel)
                .await
                .with_context(|| format!("get parameter {id}"))?;
            print_json(&param)?
        }
        Command::Param(ParamCommand::Reset { id, animation }) => client
            .reset_parameter_by_id(id, ResetParameter { reset_animation: animation }, cancel)
            .await
            .with_context(|| format!("reset parameter {id}"))?,
        Command::Thumbnail(ThumbnailCommand::Get { clip, out }) => {
            let image = match clip {
                Some(clip) => client
                    .clip_thumbnail(clip, cancel)
                    .await
                    .with_context(|| format!("get thumbnail of clip {clip}"))?,
                None => client.dummy_thumbnail(cancel).await.context("get dummy thumbnail")?,
            };
            std::fs::write(&out, &image).with_context(|| format!("write {}", out.display()))?;
            tracing::info!(path = %out.display(), bytes = image.len(), "thumbnail saved");
        }
        Command::Thumbnail(ThumbnailCommand::Set { clip, image }) => {
            let bytes =
                std::fs::read(&image).with_context(|| format!("read {}", image.display()))?;
            client
                .set_clip_thumbnail(clip, bytes, cancel)
                .await
                .with_context(|| format!("set thumbnail of clip {clip}"))?
        }
        Command::Thumbnail(ThumbnailCommand::Reset { clip }) => client
            .reset_clip_thumbnail(clip, cancel)
            .await
            .with_context(|| format!("reset thumbnail of clip {clip}"))?,
    }
    Ok(())
}

async fn print_entity<E: Entity>(
    client: &ResolumeClient,
    address: Address,
    cancel: &CancellationToken,
) -> Result<()> {
    let entity: E = client
        .get(address, cancel)
        .await
        .with_context(|| format!("get {} {address}", E::KIND))?;
    print_json(&entity)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("encode output")?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser, Debug)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(std::iter::once("resolume").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn get_takes_kind_and_address() {
        match parse(&["get", "clip", "1/4"]) {
            Command::Get { kind, address } => {
                assert_eq!(kind, Kind::Clip);
                assert_eq!(address, Address::Position { layer: 1, clip: 4 });
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn connect_flags_conflict() {
        let res = Cli::try_parse_from(["resolume", "connect", "column", "2", "--on", "--off"]);
        assert!(res.is_err());
        match parse(&["connect", "column", "id:9", "--off"]) {
            Command::Connect { on, off, address, .. } => {
                assert!(!on);
                assert!(off);
                assert_eq!(address, Address::Id(9));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn thumbnail_get_without_clip_targets_dummy() {
        match parse(&["thumbnail", "get", "--out", "dummy.png"]) {
            Command::Thumbnail(ThumbnailCommand::Get { clip, out }) => {
                assert!(clip.is_none());
                assert_eq!(out, PathBuf::from("dummy.png"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
