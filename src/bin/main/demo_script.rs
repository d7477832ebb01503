/// Session replayed when no script file is configured.
///
/// Running it twice against the same store directory shows the second
/// session resuming the first post where the first session left it.
pub(super) const DEMO_SCRIPT: &str = "\
# at_ms  command    arg
0        resize     1280
400      next
900      prev
1200     hover
2400     leave
3000     read       0
3400     scroll     480
3800     click      backdrop
4200     read       0
4800     key        tab
5200     key        enter
5600     scroll     120
6000     key        escape
6400     resize     700
6800     indicator  2
7200     read       3
7600     scroll     960
8000     click      close
";
