//! Document layout.
//!
//! Sections are flexbox containers and content blocks are pre-measured
//! leaves; Taffy computes the positions. The output is a [`DocumentLayout`]:
//! absolute block rectangles in document space (y = 0 at the top of the
//! page, below the fixed navbar), per-section extents for the scroll-spy,
//! and the total document height for scroll clamping.
//!
//! Layout runs inside a derived, so the result type is `Clone + PartialEq` -
//! an unchanged layout stops the pipeline early.

pub mod text_measure;

use taffy::{
    AlignItems, AvailableSpace, Dimension as TaffyDimension, Display, FlexDirection,
    JustifyContent, LengthPercentage, LengthPercentageAuto, NodeId, Size, Style, TaffyTree,
};

use crate::types::{BlockId, Rect, SectionId};
use crate::view::BlockKind;

// =============================================================================
// Plans - what the views hand to layout
// =============================================================================

/// One-shot reveal configuration for a block (spec: `triggerOnce`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    /// Fraction of the block that must be visible to latch (0.0 - 1.0).
    pub threshold: f32,
    /// Stagger delay in animation ticks after latching.
    pub delay: u8,
}

impl RevealSpec {
    /// The common case: 10% visibility, no stagger.
    pub const DEFAULT: Self = Self {
        threshold: 0.1,
        delay: 0,
    };

    pub const fn delayed(delay: u8) -> Self {
        Self {
            threshold: 0.1,
            delay,
        }
    }
}

/// A measured content block, ready to be placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub width: u16,
    pub height: u16,
    /// `None` renders unconditionally (no entrance animation).
    pub reveal: Option<RevealSpec>,
}

/// A horizontal run of blocks (one block for full-width content).
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub blocks: Vec<Block>,
    /// Column gap between blocks.
    pub gap: u16,
    /// Push this row to the end of the section (auto top margin).
    pub push_to_end: bool,
}

impl Row {
    pub fn single(block: Block) -> Self {
        Self {
            blocks: vec![block],
            gap: 0,
            push_to_end: false,
        }
    }

    pub fn of(blocks: Vec<Block>, gap: u16) -> Self {
        Self {
            blocks,
            gap,
            push_to_end: false,
        }
    }
}

/// A section's layout plan.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPlan {
    pub id: SectionId,
    pub padding_top: u16,
    pub padding_bottom: u16,
    /// Row gap inside the section.
    pub gap: u16,
    /// Stretch to the full viewport height and center content (the hero).
    pub fill_viewport: bool,
    pub rows: Vec<Row>,
}

// =============================================================================
// Output
// =============================================================================

/// A block with its absolute document-space rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidBlock {
    pub id: BlockId,
    pub kind: BlockKind,
    pub rect: Rect,
    pub reveal: Option<RevealSpec>,
}

/// Vertical extent of one section in document space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionExtent {
    pub id: SectionId,
    pub top: u16,
    pub height: u16,
}

/// The computed document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentLayout {
    pub width: u16,
    pub blocks: Vec<LaidBlock>,
    pub sections: Vec<SectionExtent>,
    pub total_height: u16,
}

impl DocumentLayout {
    /// Top offset of a section, if it exists in this document.
    pub fn section_top(&self, id: SectionId) -> Option<u16> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.top)
    }
}

// =============================================================================
// Computation
// =============================================================================

/// Compute the document layout for the given plans and viewport.
///
/// Taffy node construction is infallible for a well-formed tree; if it does
/// fail the function degrades to an empty document rather than crashing the
/// page (a blank frame, not a dead terminal).
pub fn compute_document(plans: &[SectionPlan], viewport: (u16, u16)) -> DocumentLayout {
    let (vw, vh) = viewport;
    if vw == 0 {
        return DocumentLayout::default();
    }

    build_tree(plans, vw, vh).unwrap_or_default()
}

fn length(cells: u16) -> TaffyDimension {
    TaffyDimension::Length(cells as f32)
}

fn build_tree(
    plans: &[SectionPlan],
    vw: u16,
    vh: u16,
) -> Result<DocumentLayout, taffy::TaffyError> {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    // Leaf nodes, in (section ordinal, block ordinal) order
    let mut leaves: Vec<(NodeId, &SectionPlan, &Block)> = Vec::new();
    let mut section_nodes: Vec<(NodeId, SectionId)> = Vec::new();

    for plan in plans {
        let mut row_nodes = Vec::with_capacity(plan.rows.len());

        for row in &plan.rows {
            let mut block_nodes = Vec::with_capacity(row.blocks.len());
            for block in &row.blocks {
                let node = tree.new_leaf(Style {
                    size: Size {
                        width: length(block.width),
                        height: length(block.height),
                    },
                    ..Default::default()
                })?;
                leaves.push((node, plan, block));
                block_nodes.push(node);
            }

            let row_style = Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                gap: Size {
                    width: LengthPercentage::Length(row.gap as f32),
                    height: LengthPercentage::Length(0.0),
                },
                margin: taffy::Rect {
                    left: LengthPercentageAuto::Length(0.0),
                    right: LengthPercentageAuto::Length(0.0),
                    top: if row.push_to_end {
                        LengthPercentageAuto::Auto
                    } else {
                        LengthPercentageAuto::Length(0.0)
                    },
                    bottom: LengthPercentageAuto::Length(0.0),
                },
                ..Default::default()
            };
            row_nodes.push(tree.new_with_children(row_style, &block_nodes)?);
        }

        let section_style = Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            align_items: Some(AlignItems::Center),
            justify_content: if plan.fill_viewport {
                Some(JustifyContent::Center)
            } else {
                Some(JustifyContent::FlexStart)
            },
            size: Size {
                width: TaffyDimension::Percent(1.0),
                height: TaffyDimension::Auto,
            },
            min_size: Size {
                width: TaffyDimension::Auto,
                height: if plan.fill_viewport {
                    length(vh)
                } else {
                    TaffyDimension::Auto
                },
            },
            padding: taffy::Rect {
                left: LengthPercentage::Length(0.0),
                right: LengthPercentage::Length(0.0),
                top: LengthPercentage::Length(plan.padding_top as f32),
                bottom: LengthPercentage::Length(plan.padding_bottom as f32),
            },
            gap: Size {
                width: LengthPercentage::Length(0.0),
                height: LengthPercentage::Length(plan.gap as f32),
            },
            ..Default::default()
        };
        let section_node = tree.new_with_children(section_style, &row_nodes)?;
        section_nodes.push((section_node, plan.id));
    }

    let root_style = Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        size: Size {
            width: length(vw),
            height: TaffyDimension::Auto,
        },
        ..Default::default()
    };
    let root = tree.new_with_children(
        root_style,
        &section_nodes.iter().map(|(n, _)| *n).collect::<Vec<_>>(),
    )?;

    tree.compute_layout(
        root,
        Size {
            width: AvailableSpace::Definite(vw as f32),
            height: AvailableSpace::MaxContent,
        },
    )?;

    // Extract absolute positions. Taffy locations are parent-relative, so
    // accumulate root -> section -> row -> leaf.
    let mut blocks = Vec::with_capacity(leaves.len());
    let mut sections = Vec::with_capacity(section_nodes.len());
    let mut ordinals: std::collections::HashMap<SectionId, u16> = std::collections::HashMap::new();

    for (section_node, section_id) in &section_nodes {
        let section_layout = tree.layout(*section_node)?;
        let section_top = section_layout.location.y.round() as u16;
        sections.push(SectionExtent {
            id: *section_id,
            top: section_top,
            height: section_layout.size.height.round() as u16,
        });

        for row_node in tree.children(*section_node)? {
            let row_layout = tree.layout(row_node)?;
            let row_x = row_layout.location.x.round() as u16;
            let row_y = section_top + row_layout.location.y.round() as u16;

            for leaf_node in tree.children(row_node)? {
                let Some((_, plan, block)) =
                    leaves.iter().find(|(n, _, _)| *n == leaf_node)
                else {
                    continue;
                };
                let leaf_layout = tree.layout(leaf_node)?;

                let ordinal = ordinals.entry(plan.id).or_insert(0);
                let id: BlockId = (plan.id, *ordinal);
                *ordinal += 1;

                blocks.push(LaidBlock {
                    id,
                    kind: block.kind.clone(),
                    rect: Rect::new(
                        row_x + leaf_layout.location.x.round() as u16,
                        row_y + leaf_layout.location.y.round() as u16,
                        leaf_layout.size.width.round() as u16,
                        leaf_layout.size.height.round() as u16,
                    ),
                    reveal: block.reveal,
                });
            }
        }
    }

    let total_height = sections
        .iter()
        .map(|s| s.top + s.height)
        .max()
        .unwrap_or(0);

    Ok(DocumentLayout {
        width: vw,
        blocks,
        sections,
        total_height,
    })
}

// =============================================================================
// Tests
// =============================================================================
