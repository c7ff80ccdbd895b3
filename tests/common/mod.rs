// tests/common/mod.rs
//
// Tree builders and the large fixture expressions shared by the test files.
#![allow(dead_code)]

use mathexpr::{BinOp, Node};

pub fn n(value: f64) -> Node {
    Node::number(value)
}

pub fn add(left: Node, right: Node) -> Node {
    Node::binary(BinOp::Add, left, right)
}

pub fn sub(left: Node, right: Node) -> Node {
    Node::binary(BinOp::Sub, left, right)
}

pub fn mul(left: Node, right: Node) -> Node {
    Node::binary(BinOp::Mul, left, right)
}

pub fn div(left: Node, right: Node) -> Node {
    Node::binary(BinOp::Div, left, right)
}

pub fn pow(left: Node, right: Node) -> Node {
    Node::binary(BinOp::Pow, left, right)
}

// ============================================================================
// Large fixtures (randomly generated trees)
// ============================================================================

pub const BIG_DATA_1_MINIMAL: &str =
    "(0.2 + 8.1) * (2.7 * -2.1 + 0.1) + (7.9 + -2.3 + (9.9 + 2.3 * -1.1 + 2.1))";
pub const BIG_DATA_1_GROUPING: &str =
    "(0.2 + 8.1) * (2.7 * -2.1 + 0.1) + ((7.9 + -2.3) + ((9.9 + 2.3 * -1.1) + 2.1))";

pub const BIG_DATA_2_MINIMAL: &str = "(68.0 + 93.5 * -85.5 / 41.1 - (42.3 + 66.8) * ((77.8 / 45.3 + -10.7 * 65.6) / (0.4 + (84.5 + -31.1 / 90.6)))) / ((-37.6 + 59.5 * ((-80.9 - -72.2) * (84.1 - -68.0 / -67.8))) * ((-96.2 + -1.2) / (2.6 + 36.7) / 40.6 * -57.4))";
pub const BIG_DATA_2_GROUPING: &str = "((68.0 + (93.5 * -85.5) / 41.1) - (42.3 + 66.8) * ((77.8 / 45.3 + -10.7 * 65.6) / (0.4 + (84.5 + -31.1 / 90.6)))) / ((-37.6 + 59.5 * ((-80.9 - -72.2) * (84.1 - -68.0 / -67.8))) * ((((-96.2 + -1.2) / (2.6 + 36.7)) / 40.6) * -57.4))";

/// Written without spaces around `**`; the parser does not care.
pub const BIG_DATA_3_POW_MINIMAL: &str = "((-19.7 - 17.1) * (-99.6 * -49.2) * (43.6**(-29.1 + -68.3) - (40.6 - 58.4) / ((86.8 + 71.8) * 51.8)) / (72.4 * (-91.1 - -3.2)) - ((-27.1**-28.2 / -99.8 / -54.3)**-50.2 / (-69.8 - 64.5 + 63.9**-92.9 + (-24.9 - (58.1 + 13.3))) + (78.0 + -34.5)))**(12.5 - 52.3 + (32.0 / 43.5 / (37.4 - -11.4))**12.2**33.0)**(-19.7**(11.0 / 67.9) * (46.2 / 97.6 * -13.9))";
pub const BIG_DATA_3_POW_GROUPING: &str = "(((((-19.7 - 17.1) * (-99.6 * -49.2)) * ((43.6**(-29.1 + -68.3)) - ((40.6 - 58.4) / ((86.8 + 71.8) * 51.8)))) / (72.4 * (-91.1 - -3.2))) - ((((((-27.1**-28.2) / -99.8) / -54.3)**-50.2) / (((-69.8 - 64.5) + (63.9**-92.9)) + (-24.9 - (58.1 + 13.3)))) + (78.0 + -34.5)))**(((12.5 - 52.3) + (((32.0 / 43.5) / (37.4 - -11.4))**(12.2**33.0)))**((-19.7**(11.0 / 67.9)) * ((46.2 / 97.6) * -13.9)))";

pub fn big_data_1() -> Node {
    add(
        mul(
            add(n(0.2), n(8.1)),
            add(
                mul(n(2.7), n(-2.1)),
                n(0.1),
            ),
        ),
        add(
            add(n(7.9), n(-2.3)),
            add(
                add(
                    n(9.9),
                    mul(n(2.3), n(-1.1)),
                ),
                n(2.1),
            ),
        ),
    )
}

pub fn big_data_2() -> Node {
    div(
        sub(
            add(
                n(68.0),
                div(
                    mul(n(93.5), n(-85.5)),
                    n(41.1),
                ),
            ),
            mul(
                add(n(42.3), n(66.8)),
                div(
                    add(
                        div(n(77.8), n(45.3)),
                        mul(n(-10.7), n(65.6)),
                    ),
                    add(
                        n(0.4),
                        add(
                            n(84.5),
                            div(n(-31.1), n(90.6)),
                        ),
                    ),
                ),
            ),
        ),
        mul(
            add(
                n(-37.6),
                mul(
                    n(59.5),
                    mul(
                        sub(n(-80.9), n(-72.2)),
                        sub(
                            n(84.1),
                            div(n(-68.0), n(-67.8)),
                        ),
                    ),
                ),
            ),
            mul(
                div(
                    div(
                        add(n(-96.2), n(-1.2)),
                        add(n(2.6), n(36.7)),
                    ),
                    n(40.6),
                ),
                n(-57.4),
            ),
        ),
    )
}

pub fn big_data_3_pow() -> Node {
    pow(
        sub(
            div(
                mul(
                    mul(
                        sub(n(-19.7), n(17.1)),
                        mul(n(-99.6), n(-49.2)),
                    ),
                    sub(
                        pow(
                            n(43.6),
                            add(n(-29.1), n(-68.3)),
                        ),
                        div(
                            sub(n(40.6), n(58.4)),
                            mul(
                                add(n(86.8), n(71.8)),
                                n(51.8),
                            ),
                        ),
                    ),
                ),
                mul(
                    n(72.4),
                    sub(n(-91.1), n(-3.2)),
                ),
            ),
            add(
                div(
                    pow(
                        div(
                            div(
                                pow(n(-27.1), n(-28.2)),
                                n(-99.8),
                            ),
                            n(-54.3),
                        ),
                        n(-50.2),
                    ),
                    add(
                        add(
                            sub(n(-69.8), n(64.5)),
                            pow(n(63.9), n(-92.9)),
                        ),
                        sub(
                            n(-24.9),
                            add(n(58.1), n(13.3)),
                        ),
                    ),
                ),
                add(n(78.0), n(-34.5)),
            ),
        ),
        pow(
            add(
                sub(n(12.5), n(52.3)),
                pow(
                    div(
                        div(n(32.0), n(43.5)),
                        sub(n(37.4), n(-11.4)),
                    ),
                    pow(n(12.2), n(33.0)),
                ),
            ),
            mul(
                pow(
                    n(-19.7),
                    div(n(11.0), n(67.9)),
                ),
                mul(
                    div(n(46.2), n(97.6)),
                    n(-13.9),
                ),
            ),
        ),
    )
}

