// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::color::{contrast_text, dim, DateBackgrounds};
use super::path::{fmt_coord, indicator, left_half, right_half, rounded_rect, IndicatorKind};
use super::plan::{
    AxisTick, Badge, CellSummary, ColumnSummary, CrossRefMarker, HalfSide, HoverInfo, Layer,
    LayoutPlan, MarkerIcon, Outline, PlanShape, RowTick, Shape, ShapeRole, ShapeStyle, TextKind,
    TextPlacement, Viewport,
};
use super::theme::WorldFill;
use crate::config::TimelineConfig;
use crate::layout::{resolve_column, wrap_text, Cell, ColumnContext, EventGroup};
use crate::model::{Character, CrossRefKind, Event, Roster, World};
use crate::query::CrossReferenceIndex;

/// Width of the row label strip left of the first column.
pub const LABEL_WIDTH: f64 = 2.0;
pub const WORLD_STRIP_OFFSET: f64 = 0.5;
pub const WORLD_STRIP_HEIGHT: f64 = 0.2;
/// Strip half-width relative to the cell half-width, before the inset.
pub const WORLD_STRIP_SCALE: f64 = 1.2;
pub const WORLD_STRIP_INSET: f64 = 0.15;
pub const MARKER_RADIUS: f64 = 0.18;
/// Vertical offsets from the row center for one marker and for a pair.
static SINGLE_MARKER_OFFSET: [f64; 1] = [0.0];
static PAIRED_MARKER_OFFSETS: [f64; 2] = [-0.5, 0.5];
pub const MAX_MARKERS_PER_EVENT: usize = 2;

const NO_CHARACTERS: &str = "N/A";

/// One column with its expansion state resolved.
#[derive(Debug, Clone)]
pub struct ResolvedColumn<'a> {
    position: usize,
    context: ColumnContext<'a>,
    cells: Vec<Cell>,
}

impl<'a> ResolvedColumn<'a> {
    pub fn resolve(
        position: usize,
        group: &EventGroup<'a>,
        roster: &Roster,
        config: &TimelineConfig,
    ) -> Self {
        let context = ColumnContext::new(group, roster, &config.text);
        let cells = resolve_column(&context, roster, config);
        let expanded = cells.iter().filter(|cell| cell.state().is_expanded()).count();
        debug!(position, events = group.len(), cells = cells.len(), expanded, "resolved column");
        Self { position, context, cells }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn context(&self) -> &ColumnContext<'a> {
        &self.context
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.context.events().first().map(|event| event.date())
    }

    fn cell(&self, row: usize) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.row() == row)
    }
}

/// Emits the plan for resolved columns, in column order.
pub fn build_layout(
    columns: &[ResolvedColumn<'_>],
    roster: &Roster,
    index: &CrossReferenceIndex,
    backgrounds: &DateBackgrounds,
    config: &TimelineConfig,
) -> LayoutPlan {
    let mut builder = PlanBuilder::new(roster, index, backgrounds, config);
    for column in columns {
        builder.column(column);
    }
    builder.finish(columns.len())
}

struct PlanBuilder<'p> {
    roster: &'p Roster,
    index: &'p CrossReferenceIndex,
    backgrounds: &'p DateBackgrounds,
    config: &'p TimelineConfig,
    columns: Vec<ColumnSummary>,
    shapes: Vec<PlanShape>,
    expanded: Vec<PlanShape>,
    texts: Vec<TextPlacement>,
    hovers: Vec<HoverInfo>,
    markers: Vec<CrossRefMarker>,
    ticks: Vec<AxisTick>,
    last_tick_year: Option<i32>,
}

impl<'p> PlanBuilder<'p> {
    fn new(
        roster: &'p Roster,
        index: &'p CrossReferenceIndex,
        backgrounds: &'p DateBackgrounds,
        config: &'p TimelineConfig,
    ) -> Self {
        Self {
            roster,
            index,
            backgrounds,
            config,
            columns: Vec::new(),
            shapes: Vec::new(),
            expanded: Vec::new(),
            texts: Vec::new(),
            hovers: Vec::new(),
            markers: Vec::new(),
            ticks: Vec::new(),
            last_tick_year: None,
        }
    }

    fn row_center(&self, row: usize) -> f64 {
        row as f64 * self.config.character_spacing
    }

    fn column(&mut self, column: &ResolvedColumn<'_>) {
        let Some(date) = column.date() else {
            return;
        };
        let position = column.position();
        let x = position as f64 * self.config.column_spacing;

        let roster = self.roster;
        for (row, character) in roster.characters().iter().enumerate() {
            match column.cell(row) {
                Some(cell) => self.active_cell(column, x, character, cell),
                None if self.config.show_non_participants => self.filler(position, x, row, date),
                None => {}
            }
        }

        for event in column.context().events() {
            self.cross_ref_markers(position, x, event);
        }
        let world = column.context().events().first().and_then(|event| event.world());
        self.world_strip(position, x, world);
        self.tick(position, x, date);

        self.columns.push(ColumnSummary {
            position,
            x,
            date: date.format("%Y-%m-%d").to_string(),
            events: column.context().events().iter().map(|event| event.id().get()).collect(),
            cells: column
                .cells()
                .iter()
                .map(|cell| CellSummary {
                    character: cell.character().to_string(),
                    row: cell.row(),
                    y0: cell.y0(),
                    y1: cell.y1(),
                    state: *cell.state(),
                    height_multiplier: cell.state().height_multiplier(),
                    description_event: cell.description().map(|id| id.get()),
                })
                .collect(),
        });
    }

    fn active_cell(
        &mut self,
        column: &ResolvedColumn<'_>,
        x: f64,
        character: &Character,
        cell: &Cell,
    ) {
        let config = self.config;
        let theme = &config.theme;
        let context = column.context();
        let position = column.position();
        let flags = context.flags_for(character.id());

        let fill = if flags.death {
            theme.death_fill.clone()
        } else if flags.important {
            dim(character.color(), theme.important_dim)
        } else {
            character.color().to_owned()
        };

        let (x0, x1) = (x - config.cell_width, x + config.cell_width);
        let (y0, y1) = (cell.y0(), cell.y1());
        let shape = PlanShape {
            shape: Shape::RoundedRect {
                x0,
                y0,
                x1,
                y1,
                radius: config.corner_radius,
                path: rounded_rect(x0, y0, x1, y1, config.corner_radius),
            },
            style: ShapeStyle { fill, layer: Layer::Between, outline: None },
            role: ShapeRole::Cell { column: position, row: cell.row() },
        };
        if cell.state().is_expanded() {
            self.expanded.push(shape);
        } else {
            self.shapes.push(shape);
        }

        if context.is_merged() {
            for &slot in context.participation_slots(character.id()) {
                let Some(kind) = IndicatorKind::from_slot(slot) else {
                    continue;
                };
                let (ax, ay) = kind.anchor(x0, y0, x1, y1);
                self.shapes.push(PlanShape {
                    shape: Shape::Indicator {
                        indicator: kind,
                        x: ax,
                        y: ay,
                        path: indicator(kind, ax, ay, config.corner_radius, config.cell_height),
                    },
                    style: ShapeStyle {
                        fill: theme.indicator_fill.clone(),
                        layer: Layer::Above,
                        outline: Some(Outline {
                            color: theme.indicator_outline.clone(),
                            width: theme.indicator_outline_width,
                        }),
                    },
                    role: ShapeRole::Indicator { column: position, row: cell.row(), slot },
                });
            }
        }

        if let Some(assigned) = context.description(character.id()) {
            let color = if flags.death {
                theme.death_description_text.clone()
            } else {
                theme.description_text.clone()
            };
            self.texts.push(TextPlacement {
                id: format!(
                    "text_trace_{}_{}_{}",
                    assigned.event_id(),
                    underscored(character.name()),
                    fmt_coord(x)
                ),
                kind: TextKind::Description,
                x,
                y: cell.center(),
                text: wrap_text(assigned.text(), config.text.cell_width, Some(cell.line_cap())),
                color,
                font_size: config.text.description_font_size,
                character: character.name().to_owned(),
                event: Some(assigned.event_id().get()),
            });
        }

        if let Some(event) = context.hover_event(character.id()) {
            self.hover(position, x, cell.row(), character, event);
        }
    }

    fn hover(&mut self, column: usize, x: f64, row: usize, character: &Character, event: &Event) {
        let theme = &self.config.theme;
        let text = &self.config.text;
        let death = event.is_death();
        let (background, text_color) = if death {
            (theme.death_fill.clone(), "white")
        } else {
            (character.color().to_owned(), contrast_text(character.color()))
        };

        self.hovers.push(HoverInfo {
            column,
            x,
            y: self.row_center(row),
            character: character.name().to_owned(),
            event: event.id().get(),
            title: event.primary().to_string(),
            date: event.date().format("%Y-%m-%d").to_string(),
            description: wrap_text(event.hover_description(), text.hover_width, None),
            characters: wrap_text(
                event.characters_text().unwrap_or(NO_CHARACTERS),
                text.characters_width,
                None,
            ),
            background,
            text_color: text_color.to_owned(),
            badge: if death { Badge::Skull } else { Badge::Star },
        });
    }

    fn filler(&mut self, column: usize, x: f64, row: usize, date: NaiveDate) {
        let config = self.config;
        let center = self.row_center(row);
        let (x0, x1) = (x - config.cell_width, x + config.cell_width);
        let (y0, y1) = (center - config.cell_height / 2.0, center + config.cell_height / 2.0);
        self.shapes.push(PlanShape {
            shape: Shape::RoundedRect {
                x0,
                y0,
                x1,
                y1,
                radius: config.corner_radius,
                path: rounded_rect(x0, y0, x1, y1, config.corner_radius),
            },
            style: ShapeStyle {
                fill: self.backgrounds.color_for(date, &config.theme).to_owned(),
                layer: Layer::Below,
                outline: None,
            },
            role: ShapeRole::Filler { column, row },
        });
    }

    fn cross_ref_markers(&mut self, column: usize, x: f64, event: &Event) {
        let Some(row) = self.roster.row_of(event.primary()) else {
            return;
        };
        let theme = &self.config.theme;
        let linked = event
            .cross_ref_tags()
            .iter()
            .filter(|tag| self.index.has_partner(event.id(), tag))
            .take(MAX_MARKERS_PER_EVENT)
            .collect::<Vec<_>>();

        let center = self.row_center(row);
        let offsets = match linked.len() {
            0 => return,
            1 => &SINGLE_MARKER_OFFSET[..],
            _ => &PAIRED_MARKER_OFFSETS[..],
        };

        for (slot, (tag, offset)) in linked.iter().zip(offsets).enumerate() {
            let (color, icon) = match tag.kind() {
                CrossRefKind::TimeTravel => (theme.time_travel_marker.clone(), MarkerIcon::Clock),
                CrossRefKind::WorldSwap => (theme.world_swap_marker.clone(), MarkerIcon::Globe),
            };
            let label = tag.kind().label();
            let destination = self
                .index
                .destination_of(event.id(), tag)
                .map(|(_, date)| date.format("%d/%m/%Y").to_string());
            let hover_text = match &destination {
                Some(date) => format!("{label}\nDestination: {date}"),
                None => label.to_owned(),
            };

            self.markers.push(CrossRefMarker {
                id: format!(
                    "btn_{}_{}_{}_{}",
                    label.replace(' ', "_"),
                    tag.number(),
                    event.id(),
                    slot
                ),
                kind: label.to_owned(),
                number: tag.number(),
                event: event.id().get(),
                slot,
                column,
                x: x + self.config.cell_width,
                y: center + offset,
                radius: MARKER_RADIUS,
                color,
                icon,
                destination,
                partners: self
                    .index
                    .partners_of(event.id(), tag)
                    .into_iter()
                    .map(|id| id.get())
                    .collect(),
                hover_text,
            });
        }
    }

    fn world_strip(&mut self, column: usize, x: f64, world: Option<&World>) {
        let config = self.config;
        let r = config.corner_radius;
        let y = self.roster.len() as f64 * config.character_spacing + WORLD_STRIP_OFFSET;
        let half_width = config.cell_width * WORLD_STRIP_SCALE;
        let (x0, x1) = (x - half_width + WORLD_STRIP_INSET, x + half_width - WORLD_STRIP_INSET);
        let (y0, y1) = (y - WORLD_STRIP_HEIGHT / 2.0, y + WORLD_STRIP_HEIGHT / 2.0);
        let style =
            |fill: &str| ShapeStyle { fill: fill.to_owned(), layer: Layer::Above, outline: None };
        let role = ShapeRole::World { column };

        match config.theme.world_fill(world) {
            WorldFill::Solid(color) => self.shapes.push(PlanShape {
                shape: Shape::RoundedRect {
                    x0,
                    y0,
                    x1,
                    y1,
                    radius: r,
                    path: rounded_rect(x0, y0, x1, y1, r),
                },
                style: style(color),
                role,
            }),
            WorldFill::Split(first, second) => {
                let x_mid = (x0 + x1) / 2.0;
                self.shapes.push(PlanShape {
                    shape: Shape::SplitHalf {
                        side: HalfSide::Left,
                        x0,
                        y0,
                        x1: x_mid,
                        y1,
                        radius: r,
                        path: left_half(x0, y0, x_mid, y1, r),
                    },
                    style: style(first),
                    role,
                });
                self.shapes.push(PlanShape {
                    shape: Shape::SplitHalf {
                        side: HalfSide::Right,
                        x0: x_mid,
                        y0,
                        x1,
                        y1,
                        radius: r,
                        path: right_half(x_mid, y0, x1, y1, r),
                    },
                    style: style(second),
                    role,
                });
            }
        }
    }

    /// The first tick of a year carries the year; later ticks in that year do not.
    fn tick(&mut self, column: usize, x: f64, date: NaiveDate) {
        let label = if self.last_tick_year == Some(date.year()) {
            date.format("%d/%m").to_string()
        } else {
            self.last_tick_year = Some(date.year());
            date.format("%d/%m/%Y").to_string()
        };
        self.ticks.push(AxisTick { column, x, label, date: date.format("%Y-%m-%d").to_string() });
    }

    fn row_labels(&mut self) -> Vec<PlanShape> {
        let config = self.config;
        let theme = &config.theme;
        let roster = self.roster;
        let mut labels = Vec::with_capacity(roster.len());
        for (row, character) in roster.characters().iter().enumerate() {
            let center = self.row_center(row);
            labels.push(PlanShape {
                shape: Shape::Rect {
                    x0: -LABEL_WIDTH,
                    y0: center - config.cell_height / 2.0,
                    x1: 0.0,
                    y1: center + config.cell_height / 2.0,
                },
                style: ShapeStyle {
                    fill: character.color().to_owned(),
                    layer: Layer::Above,
                    outline: Some(Outline {
                        color: theme.label_border.clone(),
                        width: theme.label_border_width,
                    }),
                },
                role: ShapeRole::RowLabel { row },
            });
            self.texts.push(TextPlacement {
                id: format!("character_label_{}", underscored(character.name())),
                kind: TextKind::RowLabel,
                x: -LABEL_WIDTH / 2.0,
                y: center,
                text: character.name().to_owned(),
                color: character.text_color().unwrap_or(theme.label_text.as_str()).to_owned(),
                font_size: config.text.label_font_size,
                character: character.name().to_owned(),
                event: None,
            });
        }
        labels
    }

    fn finish(mut self, column_count: usize) -> LayoutPlan {
        let labels = self.row_labels();
        let mut shapes = std::mem::take(&mut self.shapes);
        shapes.append(&mut self.expanded);
        shapes.extend(labels);

        let config = self.config;
        let rows = self.roster.len() as f64 * config.character_spacing;
        let row_ticks = self
            .roster
            .characters()
            .iter()
            .enumerate()
            .map(|(row, character)| RowTick {
                row,
                y: self.row_center(row),
                character: character.name().to_owned(),
            })
            .collect();

        LayoutPlan {
            columns: self.columns,
            shapes,
            texts: self.texts,
            hovers: self.hovers,
            markers: self.markers,
            ticks: self.ticks,
            row_ticks,
            viewport: Viewport {
                x_range: (-LABEL_WIDTH, column_count as f64 * config.column_spacing + 1.0),
                y_range: (rows + 1.0, -config.top_margin),
            },
        }
    }
}

fn underscored(name: &str) -> String {
    name.replace([' ', '/'], "_")
}

#[cfg(test)]
mod tests {
    use super::{build_layout, ResolvedColumn, MARKER_RADIUS};
    use crate::config::TimelineConfig;
    use crate::layout::{group_events, redistribute_descriptions};
    use crate::model::fixtures::{cid, date, event, letters_roster, LONG_TEXT};
    use crate::model::{Character, CrossRefKind, CrossRefTag, Event, Roster, World};
    use crate::query::CrossReferenceIndex;
    use crate::render::color::DateBackgrounds;
    use crate::render::plan::{
        Badge, Layer, LayoutPlan, MarkerIcon, PlanShape, Shape, ShapeRole, TextKind,
    };

    fn layout_for(events: &[Event], config: &TimelineConfig) -> LayoutPlan {
        layout_with_roster(&letters_roster(), events, config)
    }

    fn layout_with_roster(roster: &Roster, events: &[Event], config: &TimelineConfig) -> LayoutPlan {
        let groups = redistribute_descriptions(group_events(events, config.max_group_size));
        let columns = groups
            .iter()
            .enumerate()
            .map(|(position, group)| ResolvedColumn::resolve(position, group, roster, config))
            .collect::<Vec<_>>();
        let index = CrossReferenceIndex::index(events);
        let backgrounds = DateBackgrounds::new(events.iter().map(Event::date), &config.theme);
        build_layout(&columns, roster, &index, &backgrounds, config)
    }

    fn roles<'a>(
        plan: &'a LayoutPlan,
        pred: impl Fn(&ShapeRole) -> bool + 'a,
    ) -> impl Iterator<Item = &'a PlanShape> + 'a {
        plan.shapes.iter().filter(move |shape| pred(&shape.role))
    }

    #[test]
    fn columns_advance_by_output_position_not_by_date_gap() {
        let config = TimelineConfig::default();
        let events = [
            event(0, date(1888, 6, 21), "A", &[], "a"),
            event(1, date(2019, 11, 4), "B", &[], "b"),
            event(2, date(2053, 6, 21), "C", &[], "c"),
        ];
        let plan = layout_for(&events, &config);

        let xs = plan.columns.iter().map(|column| column.x).collect::<Vec<_>>();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
        assert_eq!(plan.viewport.x_range, (-2.0, 4.0));
        assert_eq!(plan.viewport.y_range, (6.0, -6.0));
    }

    #[test]
    fn fills_non_participants_and_colors_active_cells() {
        let config = TimelineConfig::default();
        let events = [event(0, date(2019, 11, 4), "B", &["C"], "hello")];
        let plan = layout_for(&events, &config);

        let fillers = roles(&plan, |role| matches!(role, ShapeRole::Filler { .. })).count();
        assert_eq!(fillers, 3);
        let cells = roles(&plan, |role| matches!(role, ShapeRole::Cell { .. })).collect::<Vec<_>>();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].style.fill, "#8c0048");
        assert_eq!(cells[0].style.layer, Layer::Between);

        let hidden = TimelineConfig { show_non_participants: false, ..TimelineConfig::default() };
        let plan = layout_for(&events, &hidden);
        assert_eq!(roles(&plan, |role| matches!(role, ShapeRole::Filler { .. })).count(), 0);
    }

    #[test]
    fn death_and_importance_recolor_cells_and_text() {
        let config = TimelineConfig::default();
        let events = [
            event(0, date(2019, 11, 4), "A", &["B"], "gone").with_death(true),
            event(1, date(2019, 11, 5), "C", &[], "key").with_important(true),
        ];
        let plan = layout_for(&events, &config);

        let fills = roles(&plan, |role| matches!(role, ShapeRole::Cell { .. }))
            .map(|shape| shape.style.fill.as_str())
            .collect::<Vec<_>>();
        assert_eq!(fills, vec!["#868686", "#868686", "#55000e"]);

        let gone = plan.texts.iter().find(|text| text.text == "gone").expect("death text");
        assert_eq!(gone.color, "#000000");
        let hover = plan.hovers.iter().find(|hover| hover.character == "A").expect("hover");
        assert_eq!(hover.badge, Badge::Skull);
        assert_eq!(hover.background, "#868686");
        assert_eq!(hover.text_color, "white");
    }

    #[test]
    fn expanded_cells_are_drawn_after_everything_but_labels() {
        let config = TimelineConfig::default();
        let events = [event(0, date(2019, 11, 4), "C", &[], LONG_TEXT)];
        let plan = layout_for(&events, &config);

        let kinds = plan.shapes.iter().map(|shape| &shape.role).collect::<Vec<_>>();
        let expanded_at = kinds
            .iter()
            .position(|role| matches!(role, ShapeRole::Cell { row: 2, .. }))
            .expect("expanded cell");
        let first_label = kinds
            .iter()
            .position(|role| matches!(role, ShapeRole::RowLabel { .. }))
            .expect("row label");
        assert!(kinds[..expanded_at].iter().all(|role| !matches!(role, ShapeRole::RowLabel { .. })));
        assert_eq!(expanded_at + 1, first_label);
        assert_eq!(plan.shapes.len() - first_label, 5);

        let text = plan.texts.iter().find(|text| text.kind == TextKind::Description).expect("text");
        assert!(text.text.lines().count() > 3);
        assert!(text.text.lines().count() <= config.text.two_sided_lines);
        assert_eq!(text.id, "text_trace_0_C_0");
    }

    #[test]
    fn merged_columns_mark_participation_slots() {
        let config = TimelineConfig::default();
        let day = date(2019, 11, 4);
        let events = [event(0, day, "A", &["B"], "x"), event(1, day, "C", &["B"], "y")];
        let plan = layout_for(&events, &config);

        let slots = roles(&plan, |role| matches!(role, ShapeRole::Indicator { row: 1, .. }))
            .map(|shape| match shape.role {
                ShapeRole::Indicator { slot, .. } => slot,
                _ => usize::MAX,
            })
            .collect::<Vec<_>>();
        assert_eq!(slots, vec![0, 1]);
        let top_right = roles(&plan, |role| matches!(role, ShapeRole::Indicator { row: 1, slot: 1, .. }))
            .next()
            .expect("indicator");
        assert!(matches!(top_right.shape, Shape::Indicator { x, .. } if (x - 0.8).abs() < 1e-9));

        let single = [event(0, day, "A", &["B"], "x")];
        let plan = layout_for(&single, &config);
        assert_eq!(roles(&plan, |role| matches!(role, ShapeRole::Indicator { .. })).count(), 0);
    }

    #[test]
    fn cross_ref_markers_need_a_partner() {
        let config = TimelineConfig::default();
        let travel = CrossRefTag::new(CrossRefKind::TimeTravel, 3);
        let lonely = [event(0, date(2019, 11, 4), "A", &[], "jump").with_cross_ref_tags([travel])];
        assert!(layout_for(&lonely, &config).markers.is_empty());

        let paired = [
            event(0, date(1986, 11, 4), "B", &[], "arrive").with_cross_ref_tags([travel]),
            event(1, date(2019, 11, 4), "A", &[], "jump").with_cross_ref_tags([travel]),
        ];
        let plan = layout_for(&paired, &config);
        assert_eq!(plan.markers.len(), 2);

        let jump = plan.markers.iter().find(|marker| marker.event == 1).expect("marker");
        assert_eq!(jump.id, "btn_Successful_Time_Travel_3_1_0");
        assert_eq!(jump.destination.as_deref(), Some("04/11/1986"));
        assert_eq!(jump.partners, vec![0]);
        assert_eq!(jump.icon, MarkerIcon::Clock);
        assert_eq!(jump.radius, MARKER_RADIUS);
        assert!((jump.x - (1.0 + config.cell_width)).abs() < 1e-9);
        assert_eq!(jump.y, 0.0);
    }

    #[test]
    fn two_markers_straddle_the_row() {
        let config = TimelineConfig::default();
        let travel = CrossRefTag::new(CrossRefKind::TimeTravel, 1);
        let swap = CrossRefTag::new(CrossRefKind::WorldSwap, 1);
        let events = [
            event(0, date(2020, 6, 27), "B", &[], "a").with_cross_ref_tags([travel, swap]),
            event(1, date(2020, 6, 28), "C", &[], "b").with_cross_ref_tags([travel, swap]),
        ];
        let plan = layout_for(&events, &config);
        let ys = plan.markers.iter().filter(|marker| marker.event == 0).map(|marker| marker.y).collect::<Vec<_>>();
        assert_eq!(ys, vec![0.5, 1.5]);
        assert_eq!(plan.markers[1].icon, MarkerIcon::Globe);
    }

    #[test]
    fn world_strip_splits_dual_worlds() {
        let config = TimelineConfig::default();
        let events = [
            event(0, date(2019, 11, 4), "A", &[], "a").with_world(World::parse("Jonas/Martha")),
            event(1, date(2019, 11, 5), "A", &[], "b").with_world(World::parse("Origin")),
            event(2, date(2019, 11, 6), "A", &[], "c"),
        ];
        let plan = layout_for(&events, &config);
        let strips = roles(&plan, |role| matches!(role, ShapeRole::World { .. })).collect::<Vec<_>>();
        let fills = strips.iter().map(|shape| shape.style.fill.as_str()).collect::<Vec<_>>();
        assert_eq!(fills, vec!["#f9b405", "#9803f6", "#032ff6", "#FFFFFF"]);

        let Some((y0, y1)) = strips[0].shape.y_span() else {
            panic!("strip has a span");
        };
        assert!((y0 - 5.4).abs() < 1e-9 && (y1 - 5.6).abs() < 1e-9);
        assert!(matches!(strips[0].shape, Shape::SplitHalf { x0, .. } if (x0 - (-0.96 + 0.15)).abs() < 1e-9));
    }

    #[test]
    fn ticks_show_the_year_once_per_year() {
        let config = TimelineConfig::default();
        let events = [
            event(0, date(1986, 11, 4), "A", &[], "a"),
            event(1, date(1986, 11, 5), "A", &[], "b"),
            event(2, date(2019, 11, 4), "A", &[], "c"),
            event(3, date(2019, 11, 4), "A", &[], "d"),
        ];
        let plan = layout_for(&events, &config);
        let labels = plan.ticks.iter().map(|tick| tick.label.as_str()).collect::<Vec<_>>();
        // The repeated 2019 date is split into two columns, and each column gets a tick.
        assert_eq!(labels, vec!["04/11/1986", "05/11", "04/11/2019", "04/11"]);
    }

    #[test]
    fn row_label_text_uses_the_character_color_when_set() {
        let roster = Roster::new([
            Character::new(cid("A"), "#92782d").with_text_color("black"),
            Character::new(cid("B"), "#8c0048"),
        ]);
        let config = TimelineConfig::default();
        let plan = layout_with_roster(&roster, &[event(0, date(2019, 11, 4), "A", &[], "a")], &config);

        let colors = plan
            .texts
            .iter()
            .filter(|text| text.kind == TextKind::RowLabel)
            .map(|text| text.color.as_str())
            .collect::<Vec<_>>();
        assert_eq!(colors, vec!["black", config.theme.label_text.as_str()]);
    }

    #[test]
        fn row_labels_and_row_ticks_follow_the_roster() {
        let config = TimelineConfig::default();
        let plan = layout_for(&[event(0, date(2019, 11, 4), "A", &[], "a")], &config);

        let labels = roles(&plan, |role| matches!(role, ShapeRole::RowLabel { .. })).collect::<Vec<_>>();
        assert_eq!(labels.len(), 5);
        assert!(matches!(labels[0].shape, Shape::Rect { x0, x1, .. } if x0 == -2.0 && x1 == 0.0));
        assert_eq!(labels[0].style.outline.as_ref().map(|outline| outline.width), Some(2.0));
        let label_texts = plan.texts.iter().filter(|text| text.kind == TextKind::RowLabel).count();
        assert_eq!(label_texts, 5);
        assert_eq!(plan.row_ticks.iter().map(|tick| tick.y).collect::<Vec<_>>(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }
}
